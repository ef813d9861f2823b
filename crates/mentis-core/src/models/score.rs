use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How decisively the winning pole dominates a bipolar dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StrengthBand {
    Strong,
    Moderate,
    Weak,
}

/// Aggregate outcome for one bipolar dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScore {
    pub dimension: String,
    /// Confidence-weighted total per pole, every canonical pole present.
    pub pole_totals: BTreeMap<String, f64>,
    pub winning_pole: String,
    /// Mean per-record confidence in this dimension, two decimals.
    pub average_confidence: f64,
    pub strength_band: StrengthBand,
}
