//! Unified application error type.
//! All modules (store, provider, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Provider / cache
    // ---------------------------
    #[error("Prayer time provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Cached bundle {0} is unreadable (run `rsolat cache clear`): {1}")]
    CorruptCache(String, String),

    // ---------------------------
    // Data contract
    // ---------------------------
    #[error("Malformed prayer record for {date}: {reason}")]
    MalformedRecord { date: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for failures that the `show` command degrades into a display item.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, AppError::ProviderUnavailable(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::ProviderUnavailable(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
