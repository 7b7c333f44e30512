//! # Journal Logger
//!
//! Writes log lines prefixed with syslog priority levels (`<0>` emergency
//! through `<7>` debug) so that systemd-journald, reading a service's
//! standard output, can filter and colorize them by severity.
//!
//! ```text
//! <6>service started
//! <4>retrying {"attempt":2}
//! ```
//!
//! ## Features
//!
//! - **Priority Mapping**: Eight journal levels mapped onto an internal severity scale
//! - **Structured Attributes**: Key-value fields appended as a compact JSON object
//! - **Thread Safe**: Each line reaches the stream in one uninterrupted write
//! - **Swappable Rendering**: Replace the `<N>` prefix for interactive use

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        render_bracketed_name, render_prefix, ContextGuard, FieldValue, LevelRenderer,
        LogContext, LogEntry, Logger, LoggerBuilder, LoggerContext, LoggerError, LoggerMetrics,
        PriorityLevel, Result, Severity,
    };
    pub use crate::handlers::{Destination, JournalHandler};
}

#[cfg(feature = "console")]
pub use crate::core::render_colored_name;
pub use crate::core::{
    default_renderer, render_bracketed_name, render_prefix, ContextGuard, FieldValue,
    LevelRenderer, LogContext, LogEntry, Logger, LoggerBuilder, LoggerContext, LoggerError,
    LoggerMetrics, PriorityLevel, Result, Severity, FATAL_EXIT_CODE, INFO_ORIGIN,
};
pub use crate::handlers::{Destination, JournalHandler};
