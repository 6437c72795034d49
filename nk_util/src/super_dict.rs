use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::ops::{Add, AddAssign};
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_FIELD_NAMES: [&str; 2] = ["key", "value"];

/// String-keyed mapping that loads from and saves to JSON or two-column CSV.
///
/// Keys are kept in sorted order so listings and exported files are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuperDict {
    entries: BTreeMap<String, Value>,
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl SuperDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a `.json` object or a `.csv` file, picked by extension.
    pub fn from_path(path: impl AsRef<Path>, field_names: [&str; 2]) -> Result<Self> {
        let path = path.as_ref();
        match extension(path).as_deref() {
            Some("json") => Self::from_json_file(path),
            Some("csv") => Self::from_csv_file(path, field_names),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let value: Value = serde_json::from_reader(reader)?;
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(Error::NotAnObject(path.display().to_string())),
        }
    }

    /// Reads a CSV with a header row. Only files with at most two columns
    /// are accepted; wider rows are skipped with a warning.
    pub fn from_csv_file(path: impl AsRef<Path>, field_names: [&str; 2]) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;
        let headers = reader.headers()?.clone();
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| Error::MissingColumn {
                    path: path.display().to_string(),
                    column: column.to_string(),
                })
        };
        let key_idx = position(field_names[0])?;
        let value_idx = position(field_names[1])?;

        let mut dict = SuperDict::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > 2 || headers.len() > 2 {
                warn!(
                    "{}: skipping row {} with {} fields",
                    path.display(),
                    line + 1,
                    record.len()
                );
                continue;
            }
            if let (Some(key), Some(value)) = (record.get(key_idx), record.get(value_idx)) {
                dict.insert(key, Value::String(value.to_string()));
            }
        }
        debug!("loaded {} entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    pub fn to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(file, &self.entries)?;
        Ok(())
    }

    pub fn to_csv(&self, path: impl AsRef<Path>, field_names: [&str; 2]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(field_names)?;
        for (key, value) in &self.entries {
            writer.write_record([key.as_str(), csv_cell(value).as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.entries.values().cloned().collect()
    }

    pub fn items(&self) -> Vec<(String, Value)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn random_key(&self) -> Result<String> {
        self.random_key_with(&mut rand::rng())
    }

    pub fn random_key_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        self.entries
            .keys()
            .choose(rng)
            .cloned()
            .ok_or(Error::EmptyDict)
    }

    pub fn keys_starting_with(&self, prefix: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Copies every entry of `other` in, overwriting existing keys.
    pub fn merge(&mut self, other: SuperDict) {
        self.entries.extend(other.entries);
    }

    /// Character length of the lexicographically greatest key.
    pub fn len_of_max_key(&self) -> Result<usize> {
        self.entries
            .keys()
            .next_back()
            .map(|k| k.chars().count())
            .ok_or(Error::EmptyDict)
    }
}

impl FromIterator<(String, Value)> for SuperDict {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        SuperDict {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for SuperDict {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        SuperDict { entries }
    }
}

impl Add for SuperDict {
    type Output = SuperDict;

    fn add(mut self, other: SuperDict) -> SuperDict {
        self.merge(other);
        self
    }
}

impl AddAssign for SuperDict {
    fn add_assign(&mut self, other: SuperDict) {
        self.merge(other);
    }
}
