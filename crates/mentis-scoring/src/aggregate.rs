//! Dimension aggregation.

use std::collections::BTreeMap;

use mentis_core::models::{AnswerRecord, AnswerValue};
use mentis_instruments::schema::InstrumentSchema;

/// Group a sanitized batch by dimension and accumulate weighted totals per
/// answer category: confidence weight into the chosen pole for bipolar
/// records, the item score into its category for score instruments.
///
/// Dimensions with no records are absent from the output, so downstream
/// stages never see an all-zero bucket.
pub fn aggregate(
    batch: &[AnswerRecord],
    schema: &InstrumentSchema,
) -> BTreeMap<String, BTreeMap<String, f64>> {
    let mut totals: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for record in batch {
        let Some(category) = category_of(record, schema) else {
            continue;
        };
        let weight = match &record.value {
            AnswerValue::BipolarPersonality { .. } => record.confidence.unwrap_or(1) as f64,
            _ => record.score().unwrap_or(0.0),
        };
        *totals
            .entry(record.dimension.clone())
            .or_default()
            .entry(category)
            .or_insert(0.0) += weight;
    }
    totals
}

/// The answer category a record falls into within its dimension: the chosen
/// pole for bipolar records, the item severity label where the schema has a
/// severity table, otherwise the integer score itself.
pub(crate) fn category_of(record: &AnswerRecord, schema: &InstrumentSchema) -> Option<String> {
    if let Some(polarity) = record.polarity() {
        return Some(polarity.to_string());
    }
    let score = record.score()?;
    match schema.severity_for_item(score) {
        Some(label) => Some(label.to_string()),
        None => Some(format!("{}", score.round() as i64)),
    }
}
