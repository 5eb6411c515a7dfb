pub mod check;
pub mod init;
pub mod run;
mod tests;

/// Config file used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "log_analyzer.toml";
