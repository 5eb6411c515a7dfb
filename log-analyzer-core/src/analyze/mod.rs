//! Access Log Analysis Pipeline
//!
//! Picks the most recent access log in the logs directory, computes latency
//! statistics per URL and renders them into a report file.
//!
//! A run is a single synchronous pass over one log file. Lines flow through
//! the stages below; only the aggregator keeps state while the file is read,
//! everything after it works on the finished per-URL accumulators.
//!
//! The overall data processing architecture is:
//!
//! locate_log_file
//! LogFileDescriptor
//! open_lines
//! LineExtractor
//! Aggregator
//! finalize
//! rank
//! write_report
//!

mod aggregate;
mod decode;
mod error;
mod extract;
mod finalize;
mod locate;
mod rank;
mod report;
mod run;
mod template;
mod tests;
mod types;

pub use aggregate::{AggregatedLog, Aggregator, UrlAccumulator};
pub use decode::{LogLines, open_lines};
pub use error::{AnalyzeError, Outcome};
pub use extract::LineExtractor;
pub use finalize::{ROUND_DIGITS, finalize, median, round_to};
pub use locate::locate_log_file;
pub use rank::rank;
pub use report::{TABLE_PLACEHOLDER, report_path, write_report};
pub use run::run;
pub use template::render_template;
pub use types::{CompressionKind, Extracted, LogFileDescriptor, ParsedRequest, ReportRow};
