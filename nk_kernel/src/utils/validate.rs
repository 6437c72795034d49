use crate::error::{Error, Result};
use nk_core::types::Matrix;

pub fn check_multiply(x: &Matrix, y: &Matrix) -> Result<()> {
    if x.cols() != y.rows() {
        return Err(Error::DimensionMismatch {
            op: "multiply",
            expected: x.cols(),
            found: y.rows(),
        });
    }
    Ok(())
}

pub fn check_weights(x: &Matrix, weights: &[f64]) -> Result<()> {
    if !weights.is_empty() && weights.len() != x.cols() {
        return Err(Error::DimensionMismatch {
            op: "row_mean",
            expected: x.cols(),
            found: weights.len(),
        });
    }
    Ok(())
}

pub fn check_top_n(x: &Matrix, top_n: usize) -> Result<()> {
    if top_n > x.cols() {
        return Err(Error::InvalidArgument(format!(
            "cosine_similarity: top_n = {top_n} exceeds the {} columns of the input",
            x.cols()
        )));
    }
    Ok(())
}
