use thiserror::Error;

use mentis_instruments::error::SchemaError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("answer batch is empty")]
    EmptyBatch,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
