use std::sync::LazyLock;

use mentis_core::models::InstrumentType;

use crate::schema::{DimensionSpec, InstrumentSchema, ScoreRange, SeverityLabel, TotalBand};

/// Dimension id whose non-zero answers trigger the self-harm safety rule.
pub const SUICIDAL_THOUGHTS: &str = "suicidal_thoughts";

/// Nine-item ordinal depression screener.
/// Each item is scored 0–3; the total (0–27) maps to an overall severity
/// band. Item scores carry their own severity labels.
pub fn schema() -> &'static InstrumentSchema {
    static SCHEMA: LazyLock<InstrumentSchema> = LazyLock::new(|| {
        let items = [
            ("interest_loss", "Little Interest or Pleasure"),
            ("depressed_mood", "Feeling Down or Hopeless"),
            ("sleep_disturbance", "Sleep Disturbance"),
            ("fatigue", "Fatigue or Low Energy"),
            ("appetite_change", "Appetite Change"),
            ("self_worth", "Feelings of Failure or Low Self-Worth"),
            ("concentration", "Trouble Concentrating"),
            ("psychomotor_change", "Psychomotor Slowing or Agitation"),
            (SUICIDAL_THOUGHTS, "Thoughts of Self-Harm"),
        ];

        InstrumentSchema {
            instrument: InstrumentType::DepressionScreening,
            name: "Depression Screening".to_string(),
            total_questions: 9,
            dimensions: items
                .iter()
                .map(|(id, name)| DimensionSpec {
                    id: id.to_string(),
                    name: name.to_string(),
                    poles: Vec::new(),
                })
                .collect(),
            score_range: Some(ScoreRange {
                min: 0.0,
                max: 3.0,
                step: Some(1.0),
            }),
            item_severity: severity_table(&[
                (0.0, "none"),
                (1.0, "mild"),
                (2.0, "moderate"),
                (3.0, "severe"),
            ]),
            total_bands: vec![
                band(0.0, 4.0, "minimal"),
                band(5.0, 9.0, "mild"),
                band(10.0, 14.0, "moderate"),
                band(15.0, 19.0, "moderately_severe"),
                band(20.0, 27.0, "severe"),
            ],
        }
    });
    &SCHEMA
}

fn severity_table(entries: &[(f64, &str)]) -> Vec<SeverityLabel> {
    entries
        .iter()
        .map(|(score, label)| SeverityLabel {
            score: *score,
            label: label.to_string(),
        })
        .collect()
}

fn band(min: f64, max: f64, label: &str) -> TotalBand {
    TotalBand {
        min,
        max,
        label: label.to_string(),
    }
}
