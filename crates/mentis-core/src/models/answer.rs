use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentType;

/// One raw self-report answer, as delivered by the external collector.
///
/// Records are immutable inputs: the sanitizer produces cleaned copies
/// rather than mutating them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRecord {
    pub id: Uuid,
    pub session_id: String,
    pub question_id: String,
    pub dimension: String,
    #[serde(flatten)]
    pub value: AnswerValue,
    /// Self-rated confidence, 1–5 when present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence: Option<i64>,
    pub response_time_ms: i64,
    pub timestamp: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub free_text: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// The instrument-specific part of an answer, tagged by `instrument_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "instrument_type", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    BipolarPersonality {
        polarity: String,
    },
    DepressionScreening {
        score: f64,
        /// Severity label declared by the collector, checked against the
        /// schema's score-to-severity table.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        severity: Option<String>,
    },
    Competency {
        score: f64,
    },
    SatisfactionIndex {
        score: f64,
    },
}

impl AnswerValue {
    pub fn instrument(&self) -> InstrumentType {
        match self {
            AnswerValue::BipolarPersonality { .. } => InstrumentType::BipolarPersonality,
            AnswerValue::DepressionScreening { .. } => InstrumentType::DepressionScreening,
            AnswerValue::Competency { .. } => InstrumentType::Competency,
            AnswerValue::SatisfactionIndex { .. } => InstrumentType::SatisfactionIndex,
        }
    }
}

impl AnswerRecord {
    pub fn instrument(&self) -> InstrumentType {
        self.value.instrument()
    }

    /// The numeric score, for score-carrying instruments.
    pub fn score(&self) -> Option<f64> {
        match &self.value {
            AnswerValue::BipolarPersonality { .. } => None,
            AnswerValue::DepressionScreening { score, .. }
            | AnswerValue::Competency { score }
            | AnswerValue::SatisfactionIndex { score } => Some(*score),
        }
    }

    /// The chosen pole, for bipolar instruments.
    pub fn polarity(&self) -> Option<&str> {
        match &self.value {
            AnswerValue::BipolarPersonality { polarity } => Some(polarity.as_str()),
            _ => None,
        }
    }
}
