//! Core logger types

pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod priority;
pub mod render;

pub use error::{LoggerError, Result};
pub use log_context::{ContextGuard, FieldValue, LogContext, LoggerContext};
pub use log_entry::LogEntry;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use priority::{PriorityLevel, Severity, INFO_ORIGIN};
#[cfg(feature = "console")]
pub use render::render_colored_name;
pub use render::{default_renderer, render_bracketed_name, render_prefix, LevelRenderer};
