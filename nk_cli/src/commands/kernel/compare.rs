use crate::cli::KernelOp;
use crate::commands::kernel::{cosine, multiply, row_mean};
use crate::error::Result;
use crate::utils::output::print_json;
use nk_kernel::kernel::{Reference, Vectorized};
use nk_kernel::utils::stats::max_abs_diff;
use serde::Serialize;
use tracing::info;

pub const AGREEMENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub op: &'static str,
    pub len: usize,
    pub max_abs_diff: f64,
    pub agree: bool,
}

impl Comparison {
    fn new(op: &'static str, reference: &[f64], vectorized: &[f64]) -> Self {
        let max_abs_diff = max_abs_diff(reference, vectorized);
        Comparison {
            op,
            len: reference.len(),
            max_abs_diff,
            agree: reference.len() == vectorized.len() && max_abs_diff <= AGREEMENT_TOLERANCE,
        }
    }
}

pub fn run(op: &KernelOp) -> Result<Comparison> {
    let comparison = match op {
        KernelOp::Multiply(args) => {
            let a = multiply::run(&Reference, args)?;
            let b = multiply::run(&Vectorized, args)?;
            Comparison::new("multiply", a.as_slice(), b.as_slice())
        }
        KernelOp::RowMean(args) => {
            let a = row_mean::run(&Reference, args)?;
            let b = row_mean::run(&Vectorized, args)?;
            Comparison::new("row_mean", &a, &b)
        }
        KernelOp::Cosine(args) => {
            let a = cosine::run(&Reference, args)?;
            let b = cosine::run(&Vectorized, args)?;
            Comparison::new("cosine_similarity", a.as_slice(), b.as_slice())
        }
    };
    info!(
        "{}: max abs diff {:e} over {} values",
        comparison.op, comparison.max_abs_diff, comparison.len
    );
    Ok(comparison)
}

pub fn handle(op: &KernelOp) -> Result<()> {
    print_json(&run(op)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CosineArgs, MultiplyArgs};
    use std::fs;

    #[test]
    fn test_compare_multiply_agrees() {
        let dir = tempfile::tempdir().unwrap();
        let x = dir.path().join("x.json");
        let y = dir.path().join("y.json");
        fs::write(&x, "[[1.5, -2.25, 3.0], [0.1, 0.2, 0.3]]").unwrap();
        fs::write(&y, "[[1, 2], [3, 4], [5, 6]]").unwrap();

        let comparison = run(&KernelOp::Multiply(MultiplyArgs { x, y })).unwrap();
        assert_eq!(comparison.op, "multiply");
        assert_eq!(comparison.len, 4);
        assert!(comparison.agree);
    }

    #[test]
    fn test_compare_cosine_nan_counts_as_agreement() {
        let dir = tempfile::tempdir().unwrap();
        let x = dir.path().join("x.json");
        fs::write(&x, "[[1, 2, 3], [4, 5, 6]]").unwrap();

        let args = CosineArgs {
            x,
            top_n: 0,
            no_mean: false,
            no_std: false,
        };
        let comparison = run(&KernelOp::Cosine(args)).unwrap();
        assert_eq!(comparison.max_abs_diff, 0.0);
        assert!(comparison.agree);
    }
}
