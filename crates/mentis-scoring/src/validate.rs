//! Answer batch validation.
//!
//! Collect-all semantics: every record is checked and every problem is
//! reported together. Nothing here throws. Errors block downstream scoring,
//! warnings and suggestions never do.

use serde::{Deserialize, Serialize};
use tracing::warn;

use mentis_core::models::{AnswerRecord, AnswerValue, RecordCheck, ValidationResult};
use mentis_instruments::instruments::depression::SUICIDAL_THOUGHTS;
use mentis_instruments::schema::InstrumentSchema;

/// Tunable validation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Response times above this emit a "may reduce accuracy" warning.
    pub response_time_ceiling_ms: i64,
    /// Serialized metadata larger than this many bytes emits a warning.
    pub metadata_size_limit: usize,
    /// Metadata keys containing any of these fragments emit a warning.
    pub sensitive_key_fragments: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            response_time_ceiling_ms: 5 * 60 * 1000,
            metadata_size_limit: 4096,
            sensitive_key_fragments: ["password", "token", "secret", "api_key"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Validate a whole batch against its instrument's schema.
pub fn validate(
    batch: &[AnswerRecord],
    schema: &InstrumentSchema,
    config: &ValidatorConfig,
) -> ValidationResult {
    let mut result = ValidationResult {
        is_valid: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        suggestions: Vec::new(),
    };

    if batch.is_empty() {
        result.errors.push("answer batch is empty".to_string());
        result.is_valid = false;
        return result;
    }

    for record in batch {
        result.merge(validate_one(record, schema, config));
    }
    result.is_valid = result.errors.is_empty();
    result
}

/// Validate a single record against its instrument's schema.
pub fn validate_one(
    record: &AnswerRecord,
    schema: &InstrumentSchema,
    config: &ValidatorConfig,
) -> RecordCheck {
    let mut check = RecordCheck::default();
    let id = record.id;

    if record.session_id.trim().is_empty() {
        check.errors.push(format!("record {id}: missing session_id"));
    }
    if record.question_id.trim().is_empty() {
        check.errors.push(format!("record {id}: missing question_id"));
    }

    if record.response_time_ms < 0 {
        check.errors.push(format!(
            "record {id}: response time {}ms is negative",
            record.response_time_ms
        ));
    } else if record.response_time_ms > config.response_time_ceiling_ms {
        check.warnings.push(format!(
            "record {id}: response time {}ms exceeds the {}ms ceiling and may reduce accuracy",
            record.response_time_ms, config.response_time_ceiling_ms
        ));
    }

    if record.instrument() != schema.instrument {
        check.errors.push(format!(
            "record {id}: instrument type '{}' does not match batch instrument '{}'",
            record.instrument(),
            schema.instrument
        ));
    } else {
        match schema.dimension(&record.dimension) {
            None => check.errors.push(format!(
                "record {id}: unknown dimension '{}' for instrument '{}'",
                record.dimension, schema.instrument
            )),
            Some(dim) => {
                if let Some(polarity) = record.polarity()
                    && !dim.allows_pole(polarity)
                {
                    check.errors.push(format!(
                        "record {id}: pole '{polarity}' is not valid for dimension '{}'",
                        dim.id
                    ));
                }
                if let Some(score) = record.score()
                    && let Some(range) = &schema.score_range
                    && !range.contains(score)
                {
                    check.errors.push(format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        schema.name, dim.name, score, range.min, range.max
                    ));
                }
            }
        }
    }

    if let AnswerValue::DepressionScreening {
        score,
        severity: Some(declared),
    } = &record.value
        && let Some(expected) = schema.severity_for_item(*score)
        && declared != expected
    {
        check.warnings.push(format!(
            "record {id}: declared severity '{declared}' does not match '{expected}' for score {score}"
        ));
    }

    // Unconditional safety escalation. Never deduplicated: every affected
    // record produces its own warning and suggestion.
    if let AnswerValue::DepressionScreening { score, .. } = &record.value
        && record.dimension == SUICIDAL_THOUGHTS
        && *score > 0.0
    {
        warn!(
            record_id = %id,
            session_id = %record.session_id,
            "self-harm indicator present in answer batch"
        );
        check.warnings.push(format!(
            "record {id}: non-zero response on the self-harm item; review before relying on automated scoring"
        ));
        check.suggestions.push(
            "A response indicates thoughts of self-harm. Encourage the respondent to seek \
             professional help; in the US, call or text 988 (Suicide & Crisis Lifeline)."
                .to_string(),
        );
    }

    if !record.metadata.is_empty() {
        if let Ok(serialized) = serde_json::to_string(&record.metadata)
            && serialized.len() > config.metadata_size_limit
        {
            check.warnings.push(format!(
                "record {id}: metadata payload is {} bytes (limit {})",
                serialized.len(),
                config.metadata_size_limit
            ));
        }
        for key in record.metadata.keys() {
            let lowered = key.to_lowercase();
            if config
                .sensitive_key_fragments
                .iter()
                .any(|fragment| lowered.contains(fragment.as_str()))
            {
                check.warnings.push(format!(
                    "record {id}: metadata key '{key}' looks sensitive and should not be collected"
                ));
            }
        }
    }

    check
}

/// Hard schema-conformance checks. Records failing any of these are dropped
/// by the sanitizer; everything else is clamped or reported instead.
pub(crate) fn conforms_to_schema(record: &AnswerRecord, schema: &InstrumentSchema) -> bool {
    if record.instrument() != schema.instrument {
        return false;
    }
    let Some(dim) = schema.dimension(&record.dimension) else {
        return false;
    };
    if let Some(polarity) = record.polarity()
        && !dim.allows_pole(polarity)
    {
        return false;
    }
    if let Some(score) = record.score()
        && let Some(range) = &schema.score_range
        && !range.contains(score)
    {
        return false;
    }
    true
}
