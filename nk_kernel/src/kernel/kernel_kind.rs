use crate::error::Result;
use crate::kernel::kernel::{CosineOptions, NumericKernel};
use crate::kernel::kernels::{Reference, Vectorized};
use nk_core::types::{Matrix, Strategy, Vector};

#[derive(Debug, Clone, Copy)]
pub enum KernelKind {
    Reference(Reference),
    Vectorized(Vectorized),
}

impl KernelKind {
    pub fn strategy(&self) -> Strategy {
        match self {
            KernelKind::Reference(_) => Strategy::Reference,
            KernelKind::Vectorized(_) => Strategy::Vectorized,
        }
    }
}

impl NumericKernel for KernelKind {
    fn name(&self) -> &'static str {
        match self {
            KernelKind::Reference(k) => k.name(),
            KernelKind::Vectorized(k) => k.name(),
        }
    }

    fn multiply(&self, x: &Matrix, y: &Matrix) -> Result<Matrix> {
        match self {
            KernelKind::Reference(k) => k.multiply(x, y),
            KernelKind::Vectorized(k) => k.multiply(x, y),
        }
    }

    fn row_mean(&self, x: &Matrix, weights: &[f64]) -> Result<Vector> {
        match self {
            KernelKind::Reference(k) => k.row_mean(x, weights),
            KernelKind::Vectorized(k) => k.row_mean(x, weights),
        }
    }

    fn cosine_similarity(&self, x: &Matrix, options: &CosineOptions) -> Result<Matrix> {
        match self {
            KernelKind::Reference(k) => k.cosine_similarity(x, options),
            KernelKind::Vectorized(k) => k.cosine_similarity(x, options),
        }
    }
}
