use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Batch-level meta-statistics describing answer quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerPattern {
    /// Denominator for the completion rate, from the instrument schema.
    pub total_questions: u32,
    pub answered_questions: u32,
    /// 0–100.
    pub completion_rate_pct: u32,
    pub average_response_time_ms: i64,
    /// Count of records per confidence level 1–5.
    pub confidence_distribution: BTreeMap<i64, u32>,
    pub response_time_distribution: ResponseTimeDistribution,
    /// Count of records per dimension.
    pub dimension_breakdown: BTreeMap<String, u32>,
    /// 0–100; penalized when a dimension's answers contradict each other.
    pub consistency_score: u32,
    /// 0–100; multiplicative composite of completion, confidence, and
    /// response-time plausibility.
    pub reliability_score: u32,
}

/// Response-time bucket counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseTimeDistribution {
    pub under_10s: u32,
    pub from_10s_to_30s: u32,
    pub from_30s_to_60s: u32,
    pub over_60s: u32,
}
