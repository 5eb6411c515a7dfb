use crate::conf::{LogFormat, LoggingConfig, resolve_path};
use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Keeps the background log writer alive. Drop it only at process exit,
/// otherwise buffered lines written to a log file may be lost.
#[must_use]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the process-wide tracing subscriber.
///
/// Must be called once, before the pipeline runs:
/// - `RUST_LOG` takes precedence over the configured level
/// - `pretty` writes compact human-readable lines, `json` writes flattened events
/// - output goes to stderr unless a log file is configured
pub fn init_logging(cfg: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .with_context(|| format!("invalid log level '{}'", cfg.level))?;

    let Some(file) = &cfg.file else {
        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        match cfg.format {
            LogFormat::Pretty => builder.compact().try_init(),
            LogFormat::Json => builder.json().flatten_event(true).try_init(),
        }
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        return Ok(LoggingGuard { _file_guard: None });
    };

    let file = resolve_path(file);
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => ".".into(),
    };
    let file_name = file
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", file.display()))?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, file_name));

    let builder = fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer);
    match cfg.format {
        LogFormat::Pretty => builder.compact().try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    }
    .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(LoggingGuard {
        _file_guard: Some(guard),
    })
}
