use std::sync::LazyLock;

use mentis_core::models::InstrumentType;

use crate::schema::{DimensionSpec, InstrumentSchema, ScoreRange};

/// Satisfaction-with-life index.
/// Five life areas, two items each, rated 1–7 (higher = more satisfied).
pub fn schema() -> &'static InstrumentSchema {
    static SCHEMA: LazyLock<InstrumentSchema> = LazyLock::new(|| {
        let areas = [
            ("work", "Work"),
            ("relationships", "Relationships"),
            ("health", "Health"),
            ("personal_growth", "Personal Growth"),
            ("leisure", "Leisure"),
        ];

        InstrumentSchema {
            instrument: InstrumentType::SatisfactionIndex,
            name: "Satisfaction Index".to_string(),
            total_questions: 10,
            dimensions: areas
                .iter()
                .map(|(id, name)| DimensionSpec {
                    id: id.to_string(),
                    name: name.to_string(),
                    poles: Vec::new(),
                })
                .collect(),
            score_range: Some(ScoreRange {
                min: 1.0,
                max: 7.0,
                step: Some(1.0),
            }),
            item_severity: Vec::new(),
            total_bands: Vec::new(),
        }
    });
    &SCHEMA
}
