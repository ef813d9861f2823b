//! Batch sanitization.

use mentis_core::models::AnswerRecord;
use mentis_instruments::schema::InstrumentSchema;

use crate::validate::conforms_to_schema;

/// Produce a cleaned copy of a batch; inputs are never mutated.
///
/// Records that fail hard schema conformance (wrong instrument, unknown
/// dimension, invalid pole, out-of-range score) are dropped. Confidence is
/// clamped to 1–5 (absent becomes 1) and response times are floored at zero.
/// Timestamps arrive canonical from the serde boundary and pass through.
///
/// Idempotent: sanitizing a sanitized batch changes nothing.
pub fn sanitize(batch: &[AnswerRecord], schema: &InstrumentSchema) -> Vec<AnswerRecord> {
    batch
        .iter()
        .filter(|record| conforms_to_schema(record, schema))
        .map(|record| {
            let mut clean = record.clone();
            clean.confidence = Some(record.confidence.unwrap_or(1).clamp(1, 5));
            clean.response_time_ms = record.response_time_ms.max(0);
            clean
        })
        .collect()
}
