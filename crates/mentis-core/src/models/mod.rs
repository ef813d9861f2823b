pub mod answer;
pub mod instrument;
pub mod pattern;
pub mod result;
pub mod score;
pub mod validation;

pub use answer::{AnswerRecord, AnswerValue};
pub use instrument::InstrumentType;
pub use pattern::{AnswerPattern, ResponseTimeDistribution};
pub use result::{Recommendation, ResultMetadata, ResultSummary, ScoringResult};
pub use score::{DimensionScore, StrengthBand};
pub use validation::{RecordCheck, ValidationResult};
