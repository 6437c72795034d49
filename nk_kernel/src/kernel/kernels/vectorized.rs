use crate::error::Result;
use crate::kernel::kernel::{CosineOptions, NumericKernel};
use crate::utils::stats::{dot, l2norm};
use crate::utils::top_n::mask_smallest_select;
use crate::utils::validate::{check_multiply, check_top_n, check_weights};
use nk_core::types::{Matrix, Vector};
use rayon::prelude::*;
use tracing::debug;

/// Row-parallel kernels on contiguous slices.
///
/// Output rows are independent, so each one is computed by a rayon task.
/// Summation order differs from [`Reference`](super::Reference) for
/// `multiply`, so results may differ in the last bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorized;

impl NumericKernel for Vectorized {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn multiply(&self, x: &Matrix, y: &Matrix) -> Result<Matrix> {
        check_multiply(x, y)?;
        debug!("vectorized multiply {:?} x {:?}", x.shape(), y.shape());

        let cols = y.cols();
        let mut out = Matrix::zeros(x.rows(), cols);
        // i-k-j: the inner loop walks a row of `y` and a row of `out` with stride 1
        out.as_mut_slice()
            .par_chunks_mut(cols.max(1))
            .enumerate()
            .for_each(|(i, out_row)| {
                for (k, &a) in x.row(i).iter().enumerate() {
                    for (o, &b) in out_row.iter_mut().zip(y.row(k)) {
                        *o += a * b;
                    }
                }
            });
        Ok(out)
    }

    fn row_mean(&self, x: &Matrix, weights: &[f64]) -> Result<Vector> {
        check_weights(x, weights)?;
        debug!(
            "vectorized row_mean {:?}, weighted: {}",
            x.shape(),
            !weights.is_empty()
        );

        let out: Vector = if weights.is_empty() {
            let cols = x.cols() as f64;
            (0..x.rows())
                .into_par_iter()
                .map(|i| x.row(i).iter().sum::<f64>() / cols)
                .collect()
        } else {
            let weights_sum = weights.iter().sum::<f64>();
            (0..x.rows())
                .into_par_iter()
                .map(|i| dot(x.row(i), weights) / weights_sum)
                .collect()
        };
        Ok(out)
    }

    fn cosine_similarity(&self, x: &Matrix, options: &CosineOptions) -> Result<Matrix> {
        check_top_n(x, options.top_n)?;
        debug!("vectorized cosine_similarity {:?}, {:?}", x.shape(), options);

        let (n, k) = x.shape();
        let mut work = x.clone();
        let width = k as f64;

        work.as_mut_slice()
            .par_chunks_mut(k.max(1))
            .for_each(|row| {
                if options.with_mean {
                    let m = row.iter().sum::<f64>() / width;
                    row.iter_mut().for_each(|v| *v -= m);
                }
                if options.with_std {
                    let m = row.iter().sum::<f64>() / width;
                    let var = row.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / width;
                    let s = var.sqrt();
                    row.iter_mut().for_each(|v| *v /= s);
                }
                mask_smallest_select(row, options.top_n);
            });

        let norms: Vec<f64> = (0..n).into_par_iter().map(|i| l2norm(work.row(i))).collect();

        let mut out = Matrix::zeros(n, n);
        out.as_mut_slice()
            .par_chunks_mut(n.max(1))
            .enumerate()
            .for_each(|(i, out_row)| {
                let a = work.row(i);
                for (j, o) in out_row.iter_mut().enumerate() {
                    *o = dot(a, work.row(j)) / (norms[i] * norms[j]);
                }
            });
        Ok(out)
    }
}
