use crate::error::{ErrorCore, Result};
use crate::types::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const ENV_STRATEGY: &str = "NUMKIT_STRATEGY";
pub const ENV_STRICT: &str = "NUMKIT_STRICT";

/// Selects how kernels run.
///
/// `strict` turns non-finite results (zero weight sum, zero-variance row,
/// row emptied by masking) into errors instead of returning NaN/inf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct KernelConfig {
    pub strategy: Strategy,
    pub strict: bool,
}

impl KernelConfig {
    pub fn new(strategy: Strategy) -> Self {
        KernelConfig {
            strategy,
            strict: false,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading kernel config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults, then the optional JSON file, then `NUMKIT_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_from(|key| env::var(key).ok())
    }

    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(strategy) = lookup(ENV_STRATEGY) {
            self.strategy = strategy.parse()?;
        }
        if let Some(strict) = lookup(ENV_STRICT) {
            self.strict = parse_bool(&strict)
                .ok_or_else(|| ErrorCore::InvalidConfig(format!("{ENV_STRICT}={strict}")))?;
        }
        Ok(self)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
