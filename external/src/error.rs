use acrostic_core::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid puzzle: {0}")]
    Parse(#[from] ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary serialization error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Invalid file format: expected {expected}, got {actual}")]
    InvalidFormat { expected: String, actual: String },
}
