//! Behaviour every `NumericKernel` must share. Each check runs against all strategies.

use crate::error::Error;
use crate::kernel::kernel::{CosineOptions, NumericKernel};
use crate::kernel::kernel_kind::KernelKind;
use crate::kernel::kernels::{Reference, Vectorized};
use nk_core::types::Matrix;

const TOL: f64 = 1e-9;

fn kernels() -> Vec<KernelKind> {
    vec![
        KernelKind::Reference(Reference),
        KernelKind::Vectorized(Vectorized),
    ]
}

fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

/// Deterministic pseudo-random fill in [-5, 5).
fn lcg_matrix(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut state = seed;
    let data = (0..rows * cols)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 10.0 - 5.0
        })
        .collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn assert_close(a: &[f64], b: &[f64], context: &str) {
    assert_eq!(a.len(), b.len(), "{context}: length");
    for (idx, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() <= TOL,
            "{context}: index {idx} differs, {x} vs {y}"
        );
    }
}

#[test]
fn test_multiply_strategies_agree() {
    let x = lcg_matrix(7, 5, 1);
    let y = lcg_matrix(5, 9, 2);
    let expected = Reference.multiply(&x, &y).unwrap();
    let got = Vectorized.multiply(&x, &y).unwrap();
    assert_eq!(got.shape(), (7, 9));
    assert_close(got.as_slice(), expected.as_slice(), "multiply");
}

#[test]
fn test_multiply_small_product() {
    let x = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let y = matrix(vec![vec![5.0, 6.0, 7.0], vec![8.0, 9.0, 10.0]]);
    for kernel in kernels() {
        let out = kernel.multiply(&x, &y).unwrap();
        assert_eq!(
            out.to_rows(),
            vec![vec![21.0, 24.0, 27.0], vec![47.0, 54.0, 61.0]],
            "{}",
            kernel.name()
        );
    }
}

#[test]
fn test_multiply_identity_law() {
    let x = lcg_matrix(4, 4, 3);
    let id = Matrix::identity(4);
    for kernel in kernels() {
        let out = kernel.multiply(&x, &id).unwrap();
        assert_close(out.as_slice(), x.as_slice(), kernel.name());
    }
}

#[test]
fn test_multiply_dimension_mismatch() {
    let x = lcg_matrix(2, 3, 4);
    let y = lcg_matrix(2, 3, 5);
    for kernel in kernels() {
        let err = kernel.multiply(&x, &y).unwrap_err();
        assert!(
            matches!(
                err,
                Error::DimensionMismatch {
                    op: "multiply",
                    expected: 3,
                    found: 2
                }
            ),
            "{}: {err}",
            kernel.name()
        );
    }
}

#[test]
fn test_multiply_empty_inner_dimension() {
    let x = Matrix::zeros(2, 0);
    let y = Matrix::zeros(0, 3);
    for kernel in kernels() {
        let out = kernel.multiply(&x, &y).unwrap();
        assert_eq!(out, Matrix::zeros(2, 3), "{}", kernel.name());
    }
}

#[test]
fn test_row_mean_weighted_example() {
    let x = matrix(vec![vec![1.0, 2.0, 3.0]]);
    for kernel in kernels() {
        let weighted = kernel.row_mean(&x, &[0.0, 1.0, 2.0]).unwrap();
        assert_close(&weighted, &[8.0 / 3.0], kernel.name());
        assert!((weighted[0] - 2.6667).abs() < 1e-4);

        let plain = kernel.row_mean(&x, &[]).unwrap();
        assert_close(&plain, &[2.0], kernel.name());
    }
}

#[test]
fn test_row_mean_uniform_weights_match_unweighted() {
    let x = lcg_matrix(6, 8, 6);
    let ones = vec![1.0; 8];
    for kernel in kernels() {
        let plain = kernel.row_mean(&x, &[]).unwrap();
        let uniform = kernel.row_mean(&x, &ones).unwrap();
        assert_eq!(plain.len(), 6);
        assert_close(&plain, &uniform, kernel.name());
    }
}

#[test]
fn test_row_mean_strategies_agree() {
    let x = lcg_matrix(5, 11, 7);
    let w: Vec<f64> = (0..11).map(|j| j as f64 * 0.5 + 0.1).collect();
    let expected = Reference.row_mean(&x, &w).unwrap();
    let got = Vectorized.row_mean(&x, &w).unwrap();
    assert_close(&got, &expected, "row_mean");
}

#[test]
fn test_row_mean_weight_length_mismatch() {
    let x = lcg_matrix(2, 3, 8);
    for kernel in kernels() {
        let err = kernel.row_mean(&x, &[1.0, 1.0]).unwrap_err();
        assert!(
            matches!(
                err,
                Error::DimensionMismatch {
                    op: "row_mean",
                    expected: 3,
                    found: 2
                }
            ),
            "{}: {err}",
            kernel.name()
        );
    }
}

#[test]
fn test_row_mean_zero_weight_sum_propagates() {
    let x = matrix(vec![vec![1.0, 2.0], vec![3.0, 3.0]]);
    for kernel in kernels() {
        let out = kernel.row_mean(&x, &[1.0, -1.0]).unwrap();
        assert!(out[0].is_infinite() && out[0] < 0.0, "{}", kernel.name());
        assert!(out[1].is_nan(), "{}", kernel.name());
    }
}

#[test]
fn test_cosine_worked_example() {
    let x = matrix(vec![vec![1.0, 2.0], vec![4.0, 3.0]]);
    let options = CosineOptions::new(1, true, true);
    for kernel in kernels() {
        let out = kernel.cosine_similarity(&x, &options).unwrap();
        assert_close(out.as_slice(), &[1.0, 0.0, 0.0, 1.0], kernel.name());
    }
}

#[test]
fn test_cosine_does_not_mutate_input() {
    let x = lcg_matrix(3, 6, 9);
    let before = x.clone();
    for kernel in kernels() {
        kernel
            .cosine_similarity(&x, &CosineOptions::new(2, true, true))
            .unwrap();
        assert_eq!(x, before, "{}", kernel.name());
    }
}

#[test]
fn test_cosine_is_symmetric_with_unit_diagonal() {
    let x = lcg_matrix(6, 12, 10);
    for kernel in kernels() {
        let out = kernel
            .cosine_similarity(&x, &CosineOptions::default())
            .unwrap();
        for i in 0..6 {
            assert!((out.get(i, i) - 1.0).abs() <= TOL, "{}", kernel.name());
            for j in 0..6 {
                assert_eq!(out.get(i, j), out.get(j, i), "{}", kernel.name());
            }
        }
    }
}

#[test]
fn test_cosine_symmetric_under_nan() {
    // second row is constant: zero std turns it into NaN
    let x = matrix(vec![vec![1.0, 2.0, 4.0], vec![3.0, 3.0, 3.0], vec![0.5, 0.1, 0.9]]);
    for kernel in kernels() {
        let out = kernel
            .cosine_similarity(&x, &CosineOptions::new(2, true, true))
            .unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let (a, b) = (out.get(i, j), out.get(j, i));
                assert!(a == b || (a.is_nan() && b.is_nan()), "{}", kernel.name());
            }
            assert!(out.get(1, i).is_nan(), "{}", kernel.name());
        }
        assert!(out.get(0, 2).is_finite(), "{}", kernel.name());
    }
}

#[test]
fn test_cosine_without_transform_is_plain_cosine() {
    let x = matrix(vec![vec![1.0, 0.0, 1.0], vec![0.0, 2.0, 0.0], vec![2.0, 1.0, 2.0]]);
    let options = CosineOptions::new(3, false, false);
    let s = 1.0 / 3.0;
    let expected = [
        1.0,
        0.0,
        4.0 / (2.0_f64.sqrt() * 3.0),
        0.0,
        1.0,
        s,
        4.0 / (2.0_f64.sqrt() * 3.0),
        s,
        1.0,
    ];
    for kernel in kernels() {
        let out = kernel.cosine_similarity(&x, &options).unwrap();
        assert_close(out.as_slice(), &expected, kernel.name());
    }
}

#[test]
fn test_cosine_top_n_zero_is_all_nan() {
    let x = lcg_matrix(3, 4, 11);
    for kernel in kernels() {
        let out = kernel
            .cosine_similarity(&x, &CosineOptions::new(0, true, true))
            .unwrap();
        assert!(out.as_slice().iter().all(|v| v.is_nan()), "{}", kernel.name());
    }
}

#[test]
fn test_cosine_top_n_larger_than_columns() {
    let x = lcg_matrix(2, 4, 12);
    for kernel in kernels() {
        let err = kernel
            .cosine_similarity(&x, &CosineOptions::new(5, true, true))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{}", kernel.name());
    }
}

#[test]
fn test_cosine_default_top_n_needs_ten_columns() {
    let x = lcg_matrix(2, 9, 13);
    for kernel in kernels() {
        assert!(
            kernel
                .cosine_similarity(&x, &CosineOptions::default())
                .is_err(),
            "{}",
            kernel.name()
        );
    }
}

#[test]
fn test_cosine_strategies_agree() {
    let x = lcg_matrix(8, 15, 14);
    for options in [
        CosineOptions::default(),
        CosineOptions::new(4, true, false),
        CosineOptions::new(15, false, true),
        CosineOptions::new(1, false, false),
    ] {
        let expected = Reference.cosine_similarity(&x, &options).unwrap();
        let got = Vectorized.cosine_similarity(&x, &options).unwrap();
        assert_close(got.as_slice(), expected.as_slice(), &format!("{options:?}"));
    }
}
