pub mod stats;
pub mod top_n;
pub mod validate;
