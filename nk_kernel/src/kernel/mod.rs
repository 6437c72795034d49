pub(crate) mod kernel;
pub(crate) mod kernel_kind;
pub mod kernels;

#[cfg(test)]
mod tests_contract;

pub use crate::kernel::kernel::{CosineOptions, DEFAULT_TOP_N, NumericKernel};
pub use crate::kernel::kernel_kind::KernelKind;
pub use crate::kernel::kernels::{Reference, Vectorized};
