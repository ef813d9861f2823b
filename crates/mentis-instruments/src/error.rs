use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
