use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] nk_core::error::ErrorCore),

    #[error(transparent)]
    Kernel(#[from] nk_kernel::error::Error),

    #[error(transparent)]
    Util(#[from] nk_util::error::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected exactly two --fields, got {0}")]
    FieldNames(usize),
}
