pub mod tracing;
pub mod workspace;

pub use self::tracing::{CapturedEvent, capture_events};
pub use workspace::{Compression, TestWorkspace, nginx_line};
