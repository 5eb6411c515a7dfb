mod error;
mod loader;
mod tests;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{default_config, load_config, resolve_path};
pub use types::{AnalyzerConfig, AppConfig, LogFormat, LoggingConfig, LogsConfig, ReportConfig};
pub use validate::{REQUEST_TIME_GROUP, REQUEST_URL_GROUP, compile_line_pattern, validate};
