//! Result synthesis.

use std::collections::BTreeMap;
use std::time::Instant;

use mentis_core::models::{
    AnswerPattern, AnswerRecord, DimensionScore, Recommendation, ResultMetadata, ResultSummary,
    ScoringResult, StrengthBand,
};
use mentis_instruments::schema::InstrumentSchema;

use crate::round2;

/// Version stamp carried in every result's metadata. Bump when a scoring
/// rule changes.
pub const ALGORITHM_VERSION: &str = "2.1.0";

/// Combine classifier output and pattern statistics into the final result.
pub fn synthesize(
    dimension_scores: &[DimensionScore],
    pattern: &AnswerPattern,
    batch: &[AnswerRecord],
    schema: &InstrumentSchema,
) -> ScoringResult {
    let started = Instant::now();

    let summary = if schema.is_bipolar() {
        ResultSummary::TypeCode {
            code: type_code(dimension_scores, schema),
        }
    } else {
        dimension_table(batch, schema)
    };

    let overall_confidence = if batch.is_empty() {
        0.0
    } else {
        round2(
            batch
                .iter()
                .map(|r| r.confidence.unwrap_or(1) as f64)
                .sum::<f64>()
                / batch.len() as f64,
        )
    };

    let recommendations = recommendations(dimension_scores, pattern, schema);

    ScoringResult {
        summary,
        dimension_scores: dimension_scores.to_vec(),
        answer_pattern: pattern.clone(),
        overall_confidence,
        reliability: pattern.reliability_score,
        recommendations,
        metadata: ResultMetadata {
            processing_time_ms: started.elapsed().as_millis() as u64,
            algorithm_version: ALGORITHM_VERSION.to_string(),
        },
    }
}

/// Concatenate winning poles in the schema's canonical dimension order.
/// Input order never matters; dimensions without a score contribute nothing.
fn type_code(dimension_scores: &[DimensionScore], schema: &InstrumentSchema) -> String {
    schema
        .dimensions
        .iter()
        .filter_map(|dim| dimension_scores.iter().find(|s| s.dimension == dim.id))
        .map(|s| s.winning_pole.as_str())
        .collect()
}

fn dimension_table(batch: &[AnswerRecord], schema: &InstrumentSchema) -> ResultSummary {
    let mut scores: BTreeMap<String, f64> = BTreeMap::new();
    for record in batch {
        if let Some(score) = record.score() {
            *scores.entry(record.dimension.clone()).or_insert(0.0) += score;
        }
    }
    let total: f64 = scores.values().sum();
    ResultSummary::DimensionTable {
        severity: schema.severity_for_total(total).map(|s| s.to_string()),
        scores,
        total,
    }
}

/// Ordered, non-short-circuiting rule list: every matching rule fires, in
/// this order. The default encouragement fires only when nothing else did.
fn recommendations(
    dimension_scores: &[DimensionScore],
    pattern: &AnswerPattern,
    schema: &InstrumentSchema,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if pattern.completion_rate_pct < 80 {
        out.push(Recommendation {
            title: "Complete the remaining questions".to_string(),
            description: format!(
                "Only {}% of the questionnaire was answered; results firm up as more questions are completed.",
                pattern.completion_rate_pct
            ),
        });
    }

    if pattern.average_response_time_ms < 10_000 {
        out.push(Recommendation {
            title: "Take more time on each question".to_string(),
            description: "Answers came in quickly; more deliberate responses tend to produce a more accurate profile."
                .to_string(),
        });
    }

    for score in dimension_scores {
        if score.strength_band == StrengthBand::Weak {
            let name = schema
                .dimension(&score.dimension)
                .map(|d| d.name.as_str())
                .unwrap_or(score.dimension.as_str());
            out.push(Recommendation {
                title: format!("Revisit the {name} dimension"),
                description: format!(
                    "The {name} result is close to balanced; answers there did not point clearly to either side."
                ),
            });
        }
    }

    if pattern.consistency_score < 80 {
        out.push(Recommendation {
            title: "Consider retaking the assessment".to_string(),
            description: "Several dimensions received contradictory answers; a retest may give a clearer picture."
                .to_string(),
        });
    }

    if out.is_empty() {
        out.push(Recommendation {
            title: "Results look solid".to_string(),
            description: "Completion, pacing, and consistency all look good. No follow-up needed."
                .to_string(),
        });
    }

    out
}
