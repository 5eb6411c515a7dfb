use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionKind {
    None,
    Gzip,
    Bzip2,
}

impl CompressionKind {
    /// Maps the file name suffix that follows the date token.
    /// Unknown suffixes are read as plain text.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "gz" => Self::Gzip,
            "bz2" => Self::Bzip2,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }
}

/// The log file selected for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileDescriptor {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub compression: CompressionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    /// Lowercased request URL, without query string.
    pub url: String,
    /// `$request_time`, seconds.
    pub latency: f64,
}

/// Result of applying the line pattern to one log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Matched(ParsedRequest),
    Mismatched,
}

/// Finalized statistics of one URL, as serialized into the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub time_sum: f64,
    pub count_perc: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    /// Not rounded.
    pub time_max: f64,
    pub time_med: f64,
}
