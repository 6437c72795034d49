pub mod error;
pub mod factory;
pub mod kernel;
pub mod runner;
pub mod utils;

pub use crate::kernel::{CosineOptions, KernelKind, NumericKernel};
pub use crate::runner::Runner;
