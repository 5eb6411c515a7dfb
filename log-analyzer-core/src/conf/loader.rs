use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `LOG_ANALYZER__REPORT__REPORT_SIZE=50`.
pub const ENV_PREFIX: &str = "LOG_ANALYZER";

pub fn default_config() -> AnalyzerConfig {
    AnalyzerConfig::default()
}

/// Loads the configuration at `path` layered over the built-in defaults.
///
/// Sources, lowest priority first:
/// 1. built-in defaults
/// 2. the config file (format inferred from its extension)
/// 3. `LOG_ANALYZER__<SECTION>__<KEY>` environment variables
///
/// Keys missing from the file keep their default values. The result is not
/// validated; see [`crate::conf::validate`].
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let path = resolve_path(path);
    if !path.is_file() {
        return Err(ConfigError::NotFound { path });
    }

    let defaults =
        Config::try_from(&default_config()).map_err(|e| ConfigError::load(&path, e))?;

    Config::builder()
        .add_source(defaults)
        .add_source(File::from(path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|c| c.try_deserialize::<AnalyzerConfig>())
        .map_err(|e| ConfigError::load(&path, e))
}

/// Expands a leading `~` to the user's home directory.
///
/// Relative paths are otherwise left relative to the working directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
