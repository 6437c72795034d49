use crate::kernel::KernelKind;
use crate::kernel::kernels::{Reference, Vectorized};
use nk_core::config::KernelConfig;
use nk_core::types::Strategy;

pub fn create_kernel_instance(config: &KernelConfig) -> KernelKind {
    match config.strategy {
        Strategy::Reference => KernelKind::Reference(Reference),
        Strategy::Vectorized => KernelKind::Vectorized(Vectorized),
    }
}
