pub mod error;
pub mod file_tree;
pub mod super_dict;

pub use crate::super_dict::SuperDict;
