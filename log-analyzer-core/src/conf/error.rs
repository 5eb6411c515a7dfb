use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Parsing
    #[error("failed to load config {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("config file {path} does not exist")]
    NotFound { path: PathBuf },

    // Validation
    #[error("config version '{found}' is not applicable, expected {expected}.*")]
    VersionMismatch { found: String, expected: String },

    #[error("invalid date format '{format}' for {field}")]
    InvalidDateFormat { field: &'static str, format: String },

    #[error("invalid line format: {source}")]
    InvalidPattern {
        #[source]
        source: regex::Error,
    },

    #[error("line format has no named group '{group}'")]
    MissingCaptureGroup { group: &'static str },

    #[error("unmatched line limit {value} must be within [0, 1]")]
    InvalidMismatchLimit { value: f64 },

    #[error("{what} does not exist: {path}")]
    MissingPath { what: &'static str, path: PathBuf },
}

impl ConfigError {
    pub fn load(path: impl Into<PathBuf>, source: config::ConfigError) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    pub fn missing_path(what: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MissingPath {
            what,
            path: path.into(),
        }
    }
}
