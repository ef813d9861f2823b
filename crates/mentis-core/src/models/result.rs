use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::pattern::AnswerPattern;
use super::score::DimensionScore;

/// The synthesized outcome of scoring one answer batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub summary: ResultSummary,
    pub dimension_scores: Vec<DimensionScore>,
    pub answer_pattern: AnswerPattern,
    /// Mean per-record confidence across the batch, two decimals.
    pub overall_confidence: f64,
    /// Mirrors `answer_pattern.reliability_score`.
    pub reliability: u32,
    pub recommendations: Vec<Recommendation>,
    pub metadata: ResultMetadata,
}

/// Instrument-shaped result headline: a concatenated type code for bipolar
/// instruments, a per-dimension score table for score instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ResultSummary {
    TypeCode {
        code: String,
    },
    DimensionTable {
        scores: BTreeMap<String, f64>,
        total: f64,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        severity: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultMetadata {
    /// Wall-clock duration of the synthesis call. Diagnostic only.
    pub processing_time_ms: u64,
    pub algorithm_version: String,
}
