use crate::cli::DictArgs;
use crate::error::{Error, Result};
use nk_util::SuperDict;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct DictReport {
    pub keys: Vec<String>,
    pub prefix: String,
    pub keys_with_prefix: Vec<String>,
    pub len_of_max_key: Option<usize>,
    pub random_key: Option<String>,
}

fn field_names(args: &DictArgs) -> Result<[&str; 2]> {
    match args.fields.as_slice() {
        [key, value] => Ok([key.as_str(), value.as_str()]),
        other => Err(Error::FieldNames(other.len())),
    }
}

pub fn run(args: &DictArgs) -> Result<DictReport> {
    let fields = field_names(args)?;
    let mut dict = SuperDict::new();
    for path in &args.input {
        dict += SuperDict::from_path(path, fields)?;
    }
    info!("merged {} file(s) into {} keys", args.input.len(), dict.len());

    if let Some(path) = &args.to_json {
        dict.to_json(path)?;
    }
    if let Some(path) = &args.to_csv {
        dict.to_csv(path, fields)?;
    }

    Ok(DictReport {
        keys: dict.keys(),
        prefix: args.prefix.clone(),
        keys_with_prefix: dict.keys_starting_with(&args.prefix),
        len_of_max_key: dict.len_of_max_key().ok(),
        random_key: dict.random_key().ok(),
    })
}

pub fn handle(args: &DictArgs) -> Result<()> {
    let report = run(args)?;
    println!("keys: {:?}", report.keys);
    println!("keys starting with '{}': {:?}", report.prefix, report.keys_with_prefix);
    match report.len_of_max_key {
        Some(len) => println!("len of max key: {len}"),
        None => println!("len of max key: -"),
    }
    match report.random_key {
        Some(key) => println!("random key: {key}"),
        None => println!("random key: -"),
    }
    Ok(())
}
