use crate::error::Result;
use std::fs;
use std::path::Path;

pub type Vector = Vec<f64>;

/// Reads a flat JSON array such as `[0, 1, 2]`.
pub fn vector_from_json_file(path: impl AsRef<Path>) -> Result<Vector> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
