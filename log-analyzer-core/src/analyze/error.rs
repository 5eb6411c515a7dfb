use crate::conf::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    // IO / Discovery
    #[error("failed to read logs directory {path}: {source}")]
    LogsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path} at line {line}: {source}")]
    Decode {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error(
        "mismatch limit exceeded: {mismatched} of {total} lines could not be parsed (limit {limit})"
    )]
    MismatchLimitExceeded {
        mismatched: u64,
        total: u64,
        limit: f64,
    },

    #[error("invalid date format '{format}'")]
    DateFormat { format: String },

    // Report
    #[error("failed to read report template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report rows: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn write_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteReport {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        -1
    }
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The report was rendered and saved.
    ReportWritten(PathBuf),
    /// No file in the logs directory matches the configured name.
    NoLogFile,
    /// The selected log file has no lines.
    EmptyLog(PathBuf),
    /// A report for the selected log already exists; nothing was written.
    ReportExists(PathBuf),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::ReportWritten(_) => 0,
            Outcome::NoLogFile | Outcome::EmptyLog(_) => 1,
            Outcome::ReportExists(_) => 2,
        }
    }
}
