use crate::error::ErrorCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Reference,
    #[default]
    Vectorized,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Reference => "reference",
            Strategy::Vectorized => "vectorized",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(Strategy::Reference),
            "vectorized" => Ok(Strategy::Vectorized),
            other => Err(ErrorCore::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("reference".parse::<Strategy>().unwrap(), Strategy::Reference);
        assert_eq!(" Vectorized ".parse::<Strategy>().unwrap(), Strategy::Vectorized);
        assert!("blas".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let s: Strategy = serde_json::from_str("\"reference\"").unwrap();
        assert_eq!(s, Strategy::Reference);
        assert_eq!(serde_json::to_string(&Strategy::Vectorized).unwrap(), "\"vectorized\"");
    }
}
