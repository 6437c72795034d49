use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Directory walk failed: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Unsupported file format: {0} (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("JSON document in {0} is not an object")]
    NotAnObject(String),

    #[error("CSV file {path} has no `{column}` column")]
    MissingColumn { path: String, column: String },

    #[error("Dictionary is empty")]
    EmptyDict,
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
