use crate::error::Result;
use serde::Serialize;

/// Serializes `value` to JSON text. Non-finite floats become `null`.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json_string(value)?);
    Ok(())
}
