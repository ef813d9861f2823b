use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mentis_core::models::InstrumentType;

/// Defines the valid range for a numeric item score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One pole of a bipolar dimension.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PoleSpec {
    pub id: String,
    pub name: String,
}

/// A measured axis within an instrument.
///
/// `poles` is the canonical pole order: the first listed pole wins ties in
/// downstream classification. Empty for score-based instruments.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionSpec {
    pub id: String,
    pub name: String,
    pub poles: Vec<PoleSpec>,
}

impl DimensionSpec {
    pub fn allows_pole(&self, pole: &str) -> bool {
        self.poles.iter().any(|p| p.id == pole)
    }
}

/// Maps one item score to its severity label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityLabel {
    pub score: f64,
    pub label: String,
}

/// Severity band for an instrument's total score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalBand {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

/// Static definition of one assessment instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentSchema {
    pub instrument: InstrumentType,
    pub name: String,
    /// Fixed question count; the single source of truth for the
    /// completion-rate denominator.
    pub total_questions: u32,
    /// Dimensions in canonical order. Bipolar type codes concatenate winning
    /// poles in exactly this order.
    pub dimensions: Vec<DimensionSpec>,
    /// Valid item score range, for score-based instruments.
    pub score_range: Option<ScoreRange>,
    /// Item score-to-severity table; empty when the instrument has none.
    pub item_severity: Vec<SeverityLabel>,
    /// Total-score severity bands; empty when the instrument has none.
    pub total_bands: Vec<TotalBand>,
}

impl InstrumentSchema {
    pub fn dimension(&self, id: &str) -> Option<&DimensionSpec> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    /// Whether this instrument scores by opposing poles rather than numeric
    /// item scores.
    pub fn is_bipolar(&self) -> bool {
        self.dimensions.iter().any(|d| !d.poles.is_empty())
    }

    pub fn severity_for_item(&self, score: f64) -> Option<&str> {
        self.item_severity
            .iter()
            .find(|s| (s.score - score).abs() < 1e-9)
            .map(|s| s.label.as_str())
    }

    pub fn severity_for_total(&self, total: f64) -> Option<&str> {
        self.total_bands
            .iter()
            .find(|b| total >= b.min && total <= b.max)
            .map(|b| b.label.as_str())
    }
}
