use std::sync::LazyLock;

use mentis_core::models::InstrumentType;

use crate::schema::{DimensionSpec, InstrumentSchema, PoleSpec};

/// Four-dimension bipolar type indicator.
/// 20 items; each answer picks one pole of one dimension, weighted by the
/// respondent's stated confidence. The result is a four-letter type code.
pub fn schema() -> &'static InstrumentSchema {
    static SCHEMA: LazyLock<InstrumentSchema> = LazyLock::new(|| {
        let dimensions = [
            ("energy_orientation", "Energy Orientation", ("E", "Extraversion"), ("I", "Introversion")),
            ("information_processing", "Information Processing", ("S", "Sensing"), ("N", "Intuition")),
            ("decision_making", "Decision Making", ("T", "Thinking"), ("F", "Feeling")),
            ("lifestyle_orientation", "Lifestyle Orientation", ("J", "Judging"), ("P", "Perceiving")),
        ];

        InstrumentSchema {
            instrument: InstrumentType::BipolarPersonality,
            name: "Bipolar Personality Indicator".to_string(),
            total_questions: 20,
            dimensions: dimensions
                .iter()
                .map(|(id, name, first, second)| DimensionSpec {
                    id: id.to_string(),
                    name: name.to_string(),
                    // Pole order is the tie-break order: the first pole wins
                    // when totals are equal.
                    poles: vec![pole(first.0, first.1), pole(second.0, second.1)],
                })
                .collect(),
            score_range: None,
            item_severity: Vec::new(),
            total_bands: Vec::new(),
        }
    });
    &SCHEMA
}

fn pole(id: &str, name: &str) -> PoleSpec {
    PoleSpec {
        id: id.to_string(),
        name: name.to_string(),
    }
}
