//! Batch-level answer pattern analysis.

use std::collections::{BTreeMap, BTreeSet};

use mentis_core::models::{AnswerPattern, AnswerRecord, ResponseTimeDistribution};
use mentis_instruments::schema::InstrumentSchema;

use crate::aggregate::category_of;

/// Plausible response-time window for the reliability composite.
const PLAUSIBLE_TIME_MIN_MS: i64 = 5_000;
const PLAUSIBLE_TIME_MAX_MS: i64 = 120_000;

/// Penalty per dimension whose answers disagree with each other.
const INCONSISTENCY_PENALTY: u32 = 10;

/// Compute batch-level meta-statistics over a sanitized batch.
pub fn analyze(batch: &[AnswerRecord], schema: &InstrumentSchema) -> AnswerPattern {
    let answered = batch.len() as u32;
    let total_questions = schema.total_questions;

    let completion_ratio = if total_questions == 0 {
        0.0
    } else {
        (f64::from(answered) / f64::from(total_questions)).min(1.0)
    };
    let completion_rate_pct = (completion_ratio * 100.0).round() as u32;

    let average_response_time_ms = if batch.is_empty() {
        0
    } else {
        let sum: i64 = batch.iter().map(|r| r.response_time_ms).sum();
        (sum as f64 / batch.len() as f64).round() as i64
    };

    let mut confidence_distribution: BTreeMap<i64, u32> = (1..=5).map(|level| (level, 0)).collect();
    for record in batch {
        let level = record.confidence.unwrap_or(1).clamp(1, 5);
        *confidence_distribution.entry(level).or_insert(0) += 1;
    }

    let mut response_time_distribution = ResponseTimeDistribution::default();
    for record in batch {
        match record.response_time_ms {
            t if t < 10_000 => response_time_distribution.under_10s += 1,
            t if t < 30_000 => response_time_distribution.from_10s_to_30s += 1,
            t if t < 60_000 => response_time_distribution.from_30s_to_60s += 1,
            _ => response_time_distribution.over_60s += 1,
        }
    }

    let mut dimension_breakdown: BTreeMap<String, u32> = BTreeMap::new();
    for record in batch {
        *dimension_breakdown.entry(record.dimension.clone()).or_insert(0) += 1;
    }

    AnswerPattern {
        total_questions,
        answered_questions: answered,
        completion_rate_pct,
        average_response_time_ms,
        confidence_distribution,
        response_time_distribution,
        dimension_breakdown,
        consistency_score: consistency_score(batch, schema),
        reliability_score: reliability_score(batch, completion_ratio),
    }
}

/// Start at 100 and subtract a fixed penalty for every dimension whose
/// records land in more than one answer category, floored at zero. Batches
/// with fewer than two records have no basis for detecting inconsistency
/// and score 100.
fn consistency_score(batch: &[AnswerRecord], schema: &InstrumentSchema) -> u32 {
    if batch.len() < 2 {
        return 100;
    }
    let mut categories: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for record in batch {
        if let Some(category) = category_of(record, schema) {
            categories
                .entry(record.dimension.as_str())
                .or_default()
                .insert(category);
        }
    }
    let inconsistent = categories.values().filter(|set| set.len() > 1).count() as u32;
    100u32.saturating_sub(inconsistent * INCONSISTENCY_PENALTY)
}

/// Multiplicative composite: completion x confidence x time plausibility,
/// each factor normalized to [0, 1]. A single badly-failing factor dominates
/// the result.
fn reliability_score(batch: &[AnswerRecord], completion_ratio: f64) -> u32 {
    if batch.is_empty() {
        return 0;
    }
    let confidence_sum: f64 = batch
        .iter()
        .map(|r| r.confidence.unwrap_or(1) as f64)
        .sum();
    let confidence_ratio = ((confidence_sum / batch.len() as f64) / 5.0).clamp(0.0, 1.0);

    let plausible = batch
        .iter()
        .filter(|r| (PLAUSIBLE_TIME_MIN_MS..=PLAUSIBLE_TIME_MAX_MS).contains(&r.response_time_ms))
        .count() as f64;
    let time_plausibility_ratio = plausible / batch.len() as f64;

    (100.0 * completion_ratio.clamp(0.0, 1.0) * confidence_ratio * time_plausibility_ratio).round()
        as u32
}
