use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Line pattern for the nginx "ui" access log format.
///
/// Only `request_url` and `request_time` are consumed; the remaining groups
/// document the layout of the line.
pub const DEFAULT_LINE_FORMAT: &str = concat!(
    r#"^(?P<remote_addr>\d{1,3}.\d{1,3}.\d{1,3}.\d{1,3})\s+\S+\s+\S+\s+\[(?P<time_local>.+)\]\s+""#,
    r#"(?P<request_method>[A-Z]+)\s+(?P<request_url>[\w.\-/]+)(?P<request_params>\?\S*)*\s+(?P<protocol>.*?)"\s+(?P<status>\d{3})\s+"#,
    r#"(?P<body_bytes_sent>\d+)\s+\S+\s+"(?P<http_user_agent>.*?)".*?(?P<request_time>[\d.]*)$"#,
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub app: AppConfig,
    pub logs: LogsConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Config schema version, e.g. "0.1". Must share major.minor with the binary.
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: format!(
                "{}.{}",
                env!("CARGO_PKG_VERSION_MAJOR"),
                env!("CARGO_PKG_VERSION_MINOR")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Directory scanned for access logs.
    pub dir: PathBuf,

    /// Log file name is `{prefix}{date}[.gz|.bz2]`.
    pub file_name_prefix: String,

    /// strftime-style format of the date embedded in the log file name.
    pub file_name_date_format: String,

    /// Regular expression with `request_url` and `request_time` named groups.
    /// Matched case-insensitively.
    pub line_format: String,

    /// Maximum tolerated share of unparseable lines, in [0, 1].
    /// `None` disables the check; set it to `""` or `"none"` in the file.
    #[serde(deserialize_with = "unset_if_blank")]
    pub unmatched_line_limit: Option<f64>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file_name_prefix: "nginx-access-ui.log-".to_string(),
            file_name_date_format: "%Y%m%d".to_string(),
            line_format: DEFAULT_LINE_FORMAT.to_string(),
            unmatched_line_limit: Some(0.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub dir: PathBuf,
    pub file_name_prefix: String,
    pub file_name_date_format: String,

    /// Report file extension. Inherited from the template when unset.
    pub file_name_ext: Option<String>,

    /// Maximum number of URLs in the report, ordered by total time.
    /// `None` keeps all of them; set it to `""` or `"none"` in the file.
    #[serde(deserialize_with = "unset_if_blank")]
    pub report_size: Option<usize>,

    pub template_file_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("reports"),
            file_name_prefix: "nginx-access-ui.report-".to_string(),
            file_name_date_format: "%Y%m%d".to_string(),
            file_name_ext: None,
            report_size: Some(1000),
            template_file_path: PathBuf::from("reports/report.html"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,

    /// Append log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Reads an optional number that formats without `null` can unset.
///
/// `""` and `"none"` (any case) yield `None`; other strings are parsed, which
/// covers INI files and environment variables where every value is text.
fn unset_if_blank<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() || text.eq_ignore_ascii_case("none") {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid number '{text}': {e}")))
        }
    }
}
