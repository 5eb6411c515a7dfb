pub mod analyze;
pub mod cli;
pub mod conf;
pub mod logging;

pub use analyze::{AnalyzeError, Outcome, run};
pub use conf::{AnalyzerConfig, ConfigError, load_config};
