//! Bipolar preference classification.

use std::collections::BTreeMap;

use mentis_core::models::{AnswerRecord, DimensionScore, StrengthBand};
use mentis_instruments::schema::DimensionSpec;

use crate::round2;

/// Margin ratio at or above which a preference is classified as strong.
const STRONG_MARGIN: f64 = 0.30;
/// Margin ratio at or above which a preference is classified as moderate.
const MODERATE_MARGIN: f64 = 0.15;

/// Classify one bipolar dimension from its accumulated pole totals.
///
/// The winning pole is the one with the higher total. Tie-break policy: on
/// an exact tie, the pole listed first in the dimension's canonical pole
/// order wins. Returns `None` when the dimension carries no weight at all,
/// so the dimension is omitted rather than divided by zero.
pub fn classify(
    spec: &DimensionSpec,
    pole_totals: &BTreeMap<String, f64>,
    batch: &[AnswerRecord],
) -> Option<DimensionScore> {
    // Every canonical pole appears in the output; absent buckets count as 0.
    let totals: BTreeMap<String, f64> = spec
        .poles
        .iter()
        .map(|p| (p.id.clone(), pole_totals.get(&p.id).copied().unwrap_or(0.0)))
        .collect();

    let sum: f64 = totals.values().sum();
    if sum <= 0.0 {
        return None;
    }

    let mut winner = spec.poles.first()?;
    let mut winner_total = totals.get(&winner.id).copied().unwrap_or(0.0);
    for pole in &spec.poles[1..] {
        let total = totals.get(&pole.id).copied().unwrap_or(0.0);
        // Strictly greater, so the earlier pole keeps exact ties.
        if total > winner_total {
            winner = pole;
            winner_total = total;
        }
    }

    let max = totals.values().copied().fold(f64::MIN, f64::max);
    let min = totals.values().copied().fold(f64::MAX, f64::min);
    let margin_ratio = (max - min) / (max + min);

    Some(DimensionScore {
        dimension: spec.id.clone(),
        winning_pole: winner.id.clone(),
        average_confidence: average_confidence(batch, &spec.id),
        strength_band: band_for_ratio(margin_ratio),
        pole_totals: totals,
    })
}

/// Map a margin ratio `(max - min) / (max + min)` onto a strength band.
pub fn band_for_ratio(ratio: f64) -> StrengthBand {
    if ratio >= STRONG_MARGIN {
        StrengthBand::Strong
    } else if ratio >= MODERATE_MARGIN {
        StrengthBand::Moderate
    } else {
        StrengthBand::Weak
    }
}

fn average_confidence(batch: &[AnswerRecord], dimension: &str) -> f64 {
    let confidences: Vec<f64> = batch
        .iter()
        .filter(|r| r.dimension == dimension)
        .map(|r| r.confidence.unwrap_or(1) as f64)
        .collect();
    if confidences.is_empty() {
        return 0.0;
    }
    round2(confidences.iter().sum::<f64>() / confidences.len() as f64)
}
