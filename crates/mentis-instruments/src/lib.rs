//! mentis-instruments
//!
//! Static assessment instrument schemas. Pure data — defines the dimensions,
//! poles, score ranges, severity tables, and question counts for each
//! supported instrument. The scoring pipeline consults these schemas for
//! every validation and aggregation decision.

pub mod error;
pub mod instruments;
pub mod schema;

use error::SchemaError;
use mentis_core::models::InstrumentType;
use schema::InstrumentSchema;

/// Look up the schema for an instrument type.
pub fn schema(kind: InstrumentType) -> &'static InstrumentSchema {
    match kind {
        InstrumentType::BipolarPersonality => instruments::bipolar::schema(),
        InstrumentType::DepressionScreening => instruments::depression::schema(),
        InstrumentType::Competency => instruments::competency::schema(),
        InstrumentType::SatisfactionIndex => instruments::satisfaction::schema(),
    }
}

/// All registered instrument schemas, in catalog order.
pub fn all_schemas() -> [&'static InstrumentSchema; 4] {
    [
        instruments::bipolar::schema(),
        instruments::depression::schema(),
        instruments::competency::schema(),
        instruments::satisfaction::schema(),
    ]
}

/// Look up a schema by its string identifier (e.g. `"bipolar_personality"`).
///
/// This is the entry point for callers holding an untyped instrument tag;
/// an unrecognized identifier is a hard error naming the type.
pub fn schema_by_id(id: &str) -> Result<&'static InstrumentSchema, SchemaError> {
    all_schemas()
        .into_iter()
        .find(|s| s.instrument.as_str() == id)
        .ok_or_else(|| SchemaError::UnknownInstrument(id.to_string()))
}
