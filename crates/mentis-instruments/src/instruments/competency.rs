use std::sync::LazyLock;

use mentis_core::models::InstrumentType;

use crate::schema::{DimensionSpec, InstrumentSchema, ScoreRange};

/// Self-rated competency and confidence inventory.
/// Five skill domains, three items each, rated 1–10.
pub fn schema() -> &'static InstrumentSchema {
    static SCHEMA: LazyLock<InstrumentSchema> = LazyLock::new(|| {
        let domains = [
            ("communication", "Communication"),
            ("problem_solving", "Problem Solving"),
            ("leadership", "Leadership"),
            ("collaboration", "Collaboration"),
            ("adaptability", "Adaptability"),
        ];

        InstrumentSchema {
            instrument: InstrumentType::Competency,
            name: "Competency Self-Assessment".to_string(),
            total_questions: 15,
            dimensions: domains
                .iter()
                .map(|(id, name)| DimensionSpec {
                    id: id.to_string(),
                    name: name.to_string(),
                    poles: Vec::new(),
                })
                .collect(),
            score_range: Some(ScoreRange {
                min: 1.0,
                max: 10.0,
                step: Some(1.0),
            }),
            item_severity: Vec::new(),
            total_bands: Vec::new(),
        }
    });
    &SCHEMA
}
