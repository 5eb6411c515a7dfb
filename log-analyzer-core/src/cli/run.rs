use crate::analyze;
use crate::conf::{load_config, validate};
use crate::logging::init_logging;
use anyhow::{Context, Result};
use std::path::Path;

/// Loads and validates the config, installs logging and runs the analysis.
///
/// Returns the process exit code: see [`analyze::Outcome::exit_code`] and
/// [`analyze::AnalyzeError::exit_code`].
pub fn run(config_path: &Path) -> Result<i32> {
    let cfg = load_config(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    // Logging depends on the config, so it starts after loading.
    let _guard = init_logging(&cfg.logging)?;

    if let Err(err) = validate(&cfg) {
        tracing::error!(error = %err, "invalid configuration");
        return Err(err).context("invalid configuration");
    }

    match analyze::run(&cfg) {
        Ok(outcome) => Ok(outcome.exit_code()),
        Err(err) => {
            tracing::error!(error = %err, "analysis failed");
            Ok(err.exit_code())
        }
    }
}
