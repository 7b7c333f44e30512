//! Process-wide default logger
//!
//! The default instance writes to standard output with every level enabled
//! and is created on first use. Libraries and tests should prefer an owned
//! [`Logger`]; this module exists for binaries that want plain calls like
//! `global::info("started")`.
//!
//! ```no_run
//! use journal_logger::{global, PriorityLevel};
//!
//! global::set_min_level(PriorityLevel::INFO);
//! global::info("service started").ok();
//! journal_logger::warning!(global::logger(), "cache miss rate {}%", 12).ok();
//! ```

use crate::core::{LevelRenderer, LogContext, Logger, LoggerError, PriorityLevel, Result};
use std::fmt;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, initialized with defaults on first access
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

/// Install a configured logger as the process-wide instance
///
/// Fails if the global logger was already installed or used.
pub fn init(logger: Logger) -> Result<()> {
    LOGGER
        .set(logger)
        .map_err(|_| LoggerError::config("global", "logger already initialized"))
}

pub fn set_min_level(level: PriorityLevel) {
    logger().set_min_level(level);
}

/// Replace the level renderer, e.g. when a `--no-journal` flag is passed
pub fn set_level_renderer(renderer: LevelRenderer) {
    logger().set_level_renderer(renderer);
}

pub fn log(level: PriorityLevel, message: impl fmt::Display) -> Result<()> {
    logger().log(level, message)
}

pub fn log_with_context(
    level: PriorityLevel,
    message: impl fmt::Display,
    context: LogContext,
) -> Result<()> {
    logger().log_with_context(level, message, context)
}

pub fn emergency(message: impl fmt::Display) -> Result<()> {
    logger().emergency(message)
}

pub fn alert(message: impl fmt::Display) -> Result<()> {
    logger().alert(message)
}

pub fn critical(message: impl fmt::Display) -> Result<()> {
    logger().critical(message)
}

pub fn error(message: impl fmt::Display) -> Result<()> {
    logger().error(message)
}

pub fn warning(message: impl fmt::Display) -> Result<()> {
    logger().warning(message)
}

pub fn notice(message: impl fmt::Display) -> Result<()> {
    logger().notice(message)
}

pub fn info(message: impl fmt::Display) -> Result<()> {
    logger().info(message)
}

pub fn debug(message: impl fmt::Display) -> Result<()> {
    logger().debug(message)
}

/// Log at critical level on the global logger and exit with status 1
pub fn fatal(message: impl fmt::Display) -> ! {
    logger().fatal(message)
}
