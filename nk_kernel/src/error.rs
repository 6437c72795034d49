use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] nk_core::error::ErrorCore),

    #[error("{op}: dimension mismatch, expected {expected}, found {found}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{op}: non-finite value at flat index {index}")]
    NonFiniteResult { op: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
