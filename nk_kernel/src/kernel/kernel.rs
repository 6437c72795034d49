use crate::error::Result;
use nk_core::types::{Matrix, Vector};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosineOptions {
    /// Number of largest-valued elements kept per row; the rest are zeroed.
    pub top_n: usize,
    /// Subtract each row's mean before masking.
    pub with_mean: bool,
    /// Divide each row by its population standard deviation before masking.
    pub with_std: bool,
}

impl Default for CosineOptions {
    fn default() -> Self {
        CosineOptions {
            top_n: DEFAULT_TOP_N,
            with_mean: true,
            with_std: true,
        }
    }
}

impl CosineOptions {
    pub fn new(top_n: usize, with_mean: bool, with_std: bool) -> Self {
        CosineOptions {
            top_n,
            with_mean,
            with_std,
        }
    }
}

/// The three dense kernels. Every implementation must agree with the others
/// up to floating-point reordering, and must never mutate its inputs.
///
/// Degenerate input (zero weight sum, zero-variance row, row emptied by
/// masking) is not an error here: the IEEE-754 inf/NaN is returned as is.
pub trait NumericKernel: Send + Sync {
    fn name(&self) -> &'static str;

    /// `X[N,M] · Y[M,K] -> [N,K]`.
    fn multiply(&self, x: &Matrix, y: &Matrix) -> Result<Matrix>;

    /// Per-row mean; weighted when `weights` is non-empty.
    fn row_mean(&self, x: &Matrix, weights: &[f64]) -> Result<Vector>;

    /// Pairwise row cosine similarity after centering, scaling and top-n masking.
    fn cosine_similarity(&self, x: &Matrix, options: &CosineOptions) -> Result<Matrix>;
}
