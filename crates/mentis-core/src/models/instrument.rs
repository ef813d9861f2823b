use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The closed set of supported assessment instruments.
///
/// Adding an instrument means adding a variant here and a schema module in
/// `mentis-instruments`; the compiler surfaces every dispatch site that
/// needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentType {
    /// Four-dimension bipolar type indicator (E/I, S/N, T/F, J/P).
    BipolarPersonality,
    /// Nine-item ordinal depression screener.
    DepressionScreening,
    /// Self-rated competency and confidence inventory.
    Competency,
    /// Satisfaction-with-life index.
    SatisfactionIndex,
}

impl InstrumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentType::BipolarPersonality => "bipolar_personality",
            InstrumentType::DepressionScreening => "depression_screening",
            InstrumentType::Competency => "competency",
            InstrumentType::SatisfactionIndex => "satisfaction_index",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
