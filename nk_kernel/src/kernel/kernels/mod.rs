pub mod reference;
pub mod vectorized;

pub use crate::kernel::kernels::reference::Reference;
pub use crate::kernel::kernels::vectorized::Vectorized;
