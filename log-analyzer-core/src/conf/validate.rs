use crate::conf::error::ConfigError;
use crate::conf::loader::resolve_path;
use crate::conf::types::AnalyzerConfig;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use regex::{Regex, RegexBuilder};
use std::fmt::Write as _;

pub const REQUEST_URL_GROUP: &str = "request_url";
pub const REQUEST_TIME_GROUP: &str = "request_time";

/// Semantic validation of a loaded config.
///
/// Runs before any log is touched so that a broken config never produces a
/// partial run.
pub fn validate(cfg: &AnalyzerConfig) -> Result<(), ConfigError> {
    validate_version(&cfg.app.version)?;

    validate_date_format("logs.file_name_date_format", &cfg.logs.file_name_date_format)?;
    validate_date_format(
        "report.file_name_date_format",
        &cfg.report.file_name_date_format,
    )?;

    compile_line_pattern(&cfg.logs.line_format)?;

    if let Some(limit) = cfg.logs.unmatched_line_limit {
        if !(0.0..=1.0).contains(&limit) {
            return Err(ConfigError::InvalidMismatchLimit { value: limit });
        }
    }

    let logs_dir = resolve_path(&cfg.logs.dir);
    if !logs_dir.is_dir() {
        return Err(ConfigError::missing_path("logs directory", logs_dir));
    }

    let template = resolve_path(&cfg.report.template_file_path);
    if !template.is_file() {
        return Err(ConfigError::missing_path("report template", template));
    }

    Ok(())
}

/// Compiles the configured line format, case-insensitively, and checks that
/// the groups the extractor relies on are declared.
pub fn compile_line_pattern(line_format: &str) -> Result<Regex, ConfigError> {
    let re = RegexBuilder::new(line_format)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::InvalidPattern { source })?;

    for group in [REQUEST_URL_GROUP, REQUEST_TIME_GROUP] {
        if !re.capture_names().flatten().any(|name| name == group) {
            return Err(ConfigError::MissingCaptureGroup { group });
        }
    }

    Ok(re)
}

fn validate_version(found: &str) -> Result<(), ConfigError> {
    let expected = format!(
        "{}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    );

    let major_minor: Vec<&str> = found.trim().split('.').take(2).collect();
    if major_minor.join(".") != expected {
        return Err(ConfigError::VersionMismatch {
            found: found.to_string(),
            expected,
        });
    }

    Ok(())
}

fn validate_date_format(field: &'static str, format: &str) -> Result<(), ConfigError> {
    let parses = !format.is_empty()
        && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));

    // A date has no time of day, so formats asking for one fail when rendered.
    let sample = NaiveDate::from_ymd_opt(2017, 6, 30).unwrap_or_default();
    let renders = parses && write!(String::new(), "{}", sample.format(format)).is_ok();

    if !renders {
        return Err(ConfigError::InvalidDateFormat {
            field,
            format: format.to_string(),
        });
    }
    Ok(())
}
