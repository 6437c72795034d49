pub mod matrix;
pub mod strategy;
pub mod vector;

pub use crate::types::matrix::Matrix;
pub use crate::types::strategy::Strategy;
pub use crate::types::vector::Vector;
