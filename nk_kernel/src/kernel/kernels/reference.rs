use crate::error::Result;
use crate::kernel::kernel::{CosineOptions, NumericKernel};
use crate::utils::stats::{mean, std};
use crate::utils::top_n::mask_smallest_sorted;
use crate::utils::validate::{check_multiply, check_top_n, check_weights};
use nk_core::types::{Matrix, Vector};
use tracing::debug;

/// Plain nested loops with a fixed summation order. This is the baseline the
/// other strategies are checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

impl NumericKernel for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn multiply(&self, x: &Matrix, y: &Matrix) -> Result<Matrix> {
        check_multiply(x, y)?;
        debug!("reference multiply {:?} x {:?}", x.shape(), y.shape());

        let mut out = Matrix::zeros(x.rows(), y.cols());
        for i in 0..x.rows() {
            for j in 0..y.cols() {
                let mut acc = 0.0;
                for k in 0..x.cols() {
                    acc += x.get(i, k) * y.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }

    fn row_mean(&self, x: &Matrix, weights: &[f64]) -> Result<Vector> {
        check_weights(x, weights)?;
        debug!(
            "reference row_mean {:?}, weighted: {}",
            x.shape(),
            !weights.is_empty()
        );

        let mut out = vec![0.0; x.rows()];
        if !weights.is_empty() {
            let mut weights_sum = 0.0;
            for w in weights {
                weights_sum += w;
            }
            for (i, o) in out.iter_mut().enumerate() {
                for (j, w) in weights.iter().enumerate() {
                    *o += x.get(i, j) * w;
                }
                *o /= weights_sum;
            }
        } else {
            for (i, o) in out.iter_mut().enumerate() {
                for j in 0..x.cols() {
                    *o += x.get(i, j);
                }
                *o /= x.cols() as f64;
            }
        }
        Ok(out)
    }

    fn cosine_similarity(&self, x: &Matrix, options: &CosineOptions) -> Result<Matrix> {
        check_top_n(x, options.top_n)?;
        debug!("reference cosine_similarity {:?}, {:?}", x.shape(), options);

        let (n, k) = x.shape();
        let mut work = x.clone();

        if options.with_mean {
            for i in 0..n {
                let m = mean(work.row(i));
                for v in work.row_mut(i) {
                    *v -= m;
                }
            }
        }
        if options.with_std {
            for i in 0..n {
                let s = std(work.row(i));
                for v in work.row_mut(i) {
                    *v /= s;
                }
            }
        }
        for i in 0..n {
            mask_smallest_sorted(work.row_mut(i), options.top_n);
        }

        let mut out = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let mut ab = 0.0;
                let mut norm_a = 0.0;
                let mut norm_b = 0.0;
                for d in 0..k {
                    let a = work.get(i, d);
                    let b = work.get(j, d);
                    ab += a * b;
                    norm_a += a * a;
                    norm_b += b * b;
                }
                out.set(i, j, ab / (norm_a.sqrt() * norm_b.sqrt()));
            }
        }
        Ok(out)
    }
}
