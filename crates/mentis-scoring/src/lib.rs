//! mentis-scoring
//!
//! The six-stage scoring pipeline: validation, sanitization, aggregation,
//! classification, pattern analysis, and result synthesis. Every stage is a
//! pure function over immutable inputs, so independent batches can be scored
//! in parallel with no synchronization.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod pattern;
pub mod sanitize;
pub mod synthesize;
pub mod validate;

use serde::{Deserialize, Serialize};
use tracing::info;

use mentis_core::models::{AnswerRecord, InstrumentType, ScoringResult, ValidationResult};

use error::ScoringError;
use validate::ValidatorConfig;

/// Validation feedback plus the computed result for one batch.
///
/// When `validation.is_valid` is false, callers should surface the
/// validation feedback before the computed scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredBatch {
    pub validation: ValidationResult,
    pub result: ScoringResult,
}

/// Run the full pipeline over one instrument-scoped batch.
///
/// Per-record problems are reported as data in the validation result and
/// never abort the batch; the only fatal condition is an empty input, which
/// makes scoring meaningless.
pub fn score_batch(
    batch: &[AnswerRecord],
    kind: InstrumentType,
    config: &ValidatorConfig,
) -> Result<ScoredBatch, ScoringError> {
    if batch.is_empty() {
        return Err(ScoringError::EmptyBatch);
    }
    let schema = mentis_instruments::schema(kind);
    info!(instrument = %kind, records = batch.len(), "scoring answer batch");

    let validation = validate::validate(batch, schema, config);
    let sanitized = sanitize::sanitize(batch, schema);
    let totals = aggregate::aggregate(&sanitized, schema);

    let mut dimension_scores = Vec::new();
    for dim in &schema.dimensions {
        if dim.poles.is_empty() {
            continue;
        }
        if let Some(pole_totals) = totals.get(&dim.id)
            && let Some(score) = classify::classify(dim, pole_totals, &sanitized)
        {
            dimension_scores.push(score);
        }
    }

    let answer_pattern = pattern::analyze(&sanitized, schema);
    let result = synthesize::synthesize(&dimension_scores, &answer_pattern, &sanitized, schema);

    info!(
        instrument = %kind,
        valid = validation.is_valid,
        dropped = batch.len() - sanitized.len(),
        reliability = result.reliability,
        "scoring complete"
    );

    Ok(ScoredBatch { validation, result })
}

/// As [`score_batch`], for callers holding an untyped instrument tag.
/// An unrecognized tag is a hard error naming the type.
pub fn score_batch_by_id(
    batch: &[AnswerRecord],
    instrument_id: &str,
    config: &ValidatorConfig,
) -> Result<ScoredBatch, ScoringError> {
    let schema = mentis_instruments::schema_by_id(instrument_id)?;
    score_batch(batch, schema.instrument, config)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
