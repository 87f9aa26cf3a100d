use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the region whose prayer times are requested (e.g. `WLY01`).
///
/// Zones end up inside cache file names, so only ASCII letters, digits,
/// `_` and `-` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone(String);

impl Zone {
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("zone must not be empty".into()));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::Config(format!("invalid zone identifier: {}", s)));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
