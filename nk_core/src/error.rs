use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown kernel strategy: {0} (expected `reference` or `vectorized`)")]
    UnknownStrategy(String),

    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Matrix buffer of length {len} cannot hold shape ({rows}, {cols})")]
    InvalidShape { rows: usize, cols: usize, len: usize },
}
