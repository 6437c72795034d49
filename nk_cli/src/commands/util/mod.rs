pub mod dict;
pub mod tree;
