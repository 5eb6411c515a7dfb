use crate::analyze::{self, AnalyzeError, report_path};
use crate::conf::{ConfigError, load_config, resolve_path, validate};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub config: PathBuf,
    pub logs_dir: PathBuf,
    pub template: PathBuf,
    pub unmatched_line_limit: Option<f64>,
    pub report_size: Option<usize>,
    pub log_file: Option<LogFileSummary>,
}

#[derive(Debug, Serialize)]
pub struct LogFileSummary {
    pub path: PathBuf,
    pub date: String,
    pub compression: &'static str,
    pub report: PathBuf,
    pub report_exists: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

/// Loads and validates the config at `path` and resolves the log file a run
/// would pick, without reading it.
pub fn check_config(path: &Path) -> Result<CheckSummary, CheckError> {
    let cfg = load_config(path)?;
    validate(&cfg)?;

    let logs_dir = resolve_path(&cfg.logs.dir);
    let log = analyze::locate_log_file(
        &logs_dir,
        &cfg.logs.file_name_prefix,
        &cfg.logs.file_name_date_format,
    )?;

    let log_file = match log {
        Some(log) => {
            let report = report_path(&cfg.report, log.date)?;
            Some(LogFileSummary {
                date: log.date.to_string(),
                compression: log.compression.as_str(),
                report_exists: report.exists(),
                report,
                path: log.path,
            })
        }
        None => None,
    };

    Ok(CheckSummary {
        config: path.to_path_buf(),
        logs_dir,
        template: resolve_path(&cfg.report.template_file_path),
        unmatched_line_limit: cfg.logs.unmatched_line_limit,
        report_size: cfg.report.report_size,
        log_file,
    })
}

pub fn check(path: &Path, json: bool) -> anyhow::Result<()> {
    match check_config(path) {
        Ok(summary) if json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(err) => {
            print_check_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_summary(summary: &CheckSummary) {
    println!("{} Config loaded successfully", "✔".green());
    println!("{} logs directory {}", "✔".green(), summary.logs_dir.display());
    println!("{} report template {}", "✔".green(), summary.template.display());

    match &summary.log_file {
        Some(log) => {
            println!(
                "{} latest log {} ({}, {})",
                "✔".green(),
                log.path.display(),
                log.date,
                log.compression
            );
            if log.report_exists {
                println!(
                    "{} report {} already exists",
                    "!".yellow(),
                    log.report.display()
                );
            } else {
                println!("{} report {}", "✔".green(), log.report.display());
            }
        }
        None => println!("{} no log files found", "!".yellow()),
    }
}

fn print_check_error(err: &CheckError) {
    eprintln!("{} {}", "✘".red(), err);
    if let Some(hint) = check_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn check_error_hint(err: &CheckError) -> Option<&'static str> {
    match err {
        CheckError::Config(ConfigError::NotFound { .. }) => {
            Some("Create a default config with `log-analyzer init`.")
        }

        CheckError::Config(ConfigError::MissingCaptureGroup { .. }) => Some(
            "The line format must capture the URL and the request time:\n\
             \n\
             (?P<request_url>...) and (?P<request_time>...)",
        ),

        CheckError::Config(ConfigError::VersionMismatch { .. }) => Some(
            "Update `version` in the [app] section or regenerate the config with `log-analyzer init --force`.",
        ),

        CheckError::Config(ConfigError::InvalidDateFormat { .. }) => Some(
            "Date formats use strftime syntax, e.g. \"%Y%m%d\" for 20170630.",
        ),

        _ => None,
    }
}
