use crate::error::{Error, Result};
use crate::factory::kernel::create_kernel_instance;
use crate::kernel::{CosineOptions, KernelKind, NumericKernel};
use nk_core::config::KernelConfig;
use nk_core::types::{Matrix, Strategy, Vector};
use tracing::{debug, warn};

/// Entry point for callers: the configured kernel plus the strict-mode check.
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    kernel: KernelKind,
    strict: bool,
}

fn ensure_finite(op: &'static str, values: &[f64]) -> Result<()> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        warn!("{op}: non-finite result at flat index {index}");
        return Err(Error::NonFiniteResult { op, index });
    }
    Ok(())
}

impl Runner {
    pub fn new(config: &KernelConfig) -> Self {
        debug!(
            "runner using {} kernel, strict: {}",
            config.strategy, config.strict
        );
        Runner {
            kernel: create_kernel_instance(config),
            strict: config.strict,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.kernel.strategy()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new(&KernelConfig::default())
    }
}

impl NumericKernel for Runner {
    fn name(&self) -> &'static str {
        self.kernel.name()
    }

    fn multiply(&self, x: &Matrix, y: &Matrix) -> Result<Matrix> {
        let out = self.kernel.multiply(x, y)?;
        if self.strict {
            ensure_finite("multiply", out.as_slice())?;
        }
        Ok(out)
    }

    fn row_mean(&self, x: &Matrix, weights: &[f64]) -> Result<Vector> {
        let out = self.kernel.row_mean(x, weights)?;
        if self.strict {
            ensure_finite("row_mean", &out)?;
        }
        Ok(out)
    }

    fn cosine_similarity(&self, x: &Matrix, options: &CosineOptions) -> Result<Matrix> {
        let out = self.kernel.cosine_similarity(x, options)?;
        if self.strict {
            ensure_finite("cosine_similarity", out.as_slice())?;
        }
        Ok(out)
    }
}
