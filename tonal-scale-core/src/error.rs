use thiserror::Error;

#[derive(Error, Debug)]
pub enum TonalError {
    #[error("{parameter} must be between 0 and 1, got {value}")]
    OutOfRange { parameter: &'static str, value: f64 },

    #[error("Unsupported blend mode: {0}")]
    UnknownBlendMode(String),

    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("Invalid parameter {name}: {value} is outside {min}..={max}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Index {index} is out of bounds for a scale of {len} steps")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid params payload: {0}")]
    InvalidPayload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TonalError>;
