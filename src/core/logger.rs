//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    log_context::{ContextGuard, FieldValue, LogContext, LoggerContext},
    log_entry::LogEntry,
    metrics::LoggerMetrics,
    priority::{PriorityLevel, Severity},
    render::LevelRenderer,
};
use crate::handlers::{Destination, JournalHandler};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;

/// Exit status used by [`Logger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// Level-gated logger writing journal priority lines
///
/// Gating happens on the internal [`Severity`] scale before any formatting
/// work; entries that pass are handed to the [`JournalHandler`].
///
/// # Example
///
/// ```
/// use journal_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(PriorityLevel::INFO)
///     .writer(Vec::new())
///     .build();
///
/// logger.info("service started").unwrap();
/// logger.debug("suppressed").unwrap();
/// assert_eq!(logger.metrics().lines_written(), 1);
/// ```
pub struct Logger {
    min_level: RwLock<PriorityLevel>,
    handler: JournalHandler,
    /// Fields added to every entry
    context: LoggerContext,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to standard output with every level enabled
    #[must_use]
    pub fn new() -> Self {
        Self::with_handler(JournalHandler::stdout())
    }

    #[must_use]
    pub fn with_destination(destination: Destination) -> Self {
        Self::with_handler(JournalHandler::new(destination))
    }

    #[must_use]
    pub fn with_handler(handler: JournalHandler) -> Self {
        Self {
            min_level: RwLock::new(PriorityLevel::DEBUG),
            handler,
            context: LoggerContext::new(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Set the least severe level that is still written
    pub fn set_min_level(&self, level: PriorityLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> PriorityLevel {
        *self.min_level.read()
    }

    /// Replace the level-to-prefix renderer for all subsequent lines
    pub fn set_level_renderer(&self, renderer: LevelRenderer) {
        self.handler.set_renderer(renderer);
    }

    #[inline]
    pub fn enabled(&self, level: PriorityLevel) -> bool {
        self.severity_enabled(level.to_severity())
    }

    #[inline]
    fn severity_enabled(&self, severity: Severity) -> bool {
        PriorityLevel::from_severity(severity).is_at_least(*self.min_level.read())
    }

    /// Persistent fields merged into every entry
    pub fn context(&self) -> &LoggerContext {
        &self.context
    }

    /// Add a persistent field for the lifetime of the returned guard
    #[must_use = "the field is removed as soon as the guard is dropped"]
    pub fn scoped_field<K, V>(&self, key: K, value: V) -> ContextGuard
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.scoped(key, value)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn handler(&self) -> &JournalHandler {
        &self.handler
    }

    /// Log a message at `level`
    ///
    /// The message is only rendered to a string when the level is enabled,
    /// so passing `format_args!` costs nothing for suppressed levels.
    pub fn log(&self, level: PriorityLevel, message: impl fmt::Display) -> Result<()> {
        self.log_severity(level.to_severity(), message, LogContext::new())
    }

    /// Log with structured attributes appended as a JSON object
    pub fn log_with_context(
        &self,
        level: PriorityLevel,
        message: impl fmt::Display,
        context: LogContext,
    ) -> Result<()> {
        self.log_severity(level.to_severity(), message, context)
    }

    /// Log directly on the internal severity scale
    ///
    /// Severities outside the band of the eight named levels are accepted;
    /// their derived priority is written as-is.
    pub fn log_severity(
        &self,
        severity: Severity,
        message: impl fmt::Display,
        mut context: LogContext,
    ) -> Result<()> {
        if !self.severity_enabled(severity) {
            self.metrics.record_suppressed();
            return Ok(());
        }

        self.context.merge_into(&mut context);
        let entry = LogEntry::with_severity(severity, message.to_string()).with_context(context);
        self.dispatch(&entry)
    }

    fn dispatch(&self, entry: &LogEntry) -> Result<()> {
        match self.handler.handle(entry) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.handler.flush()
    }

    /// Log a single displayable value at emergency
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `emergency!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn emergency(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::EMERGENCY, message)
    }

    /// Log a single displayable value at alert
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `alert!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn alert(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::ALERT, message)
    }

    /// Log a single displayable value at critical
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `critical!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn critical(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::CRITICAL, message)
    }

    /// Log a single displayable value at error
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `error!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn error(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::ERROR, message)
    }

    /// Log a single displayable value at warning
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `warning!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn warning(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::WARNING, message)
    }

    /// Log a single displayable value at notice
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `notice!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn notice(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::NOTICE, message)
    }

    /// Log a single displayable value at info
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `info!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn info(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::INFO, message)
    }

    /// Log a single displayable value at debug
    ///
    /// Messages built from several values go through the format macro,
    /// e.g. `debug!(logger, "{} of {}", done, total)`.
    #[inline]
    pub fn debug(&self, message: impl fmt::Display) -> Result<()> {
        self.log(PriorityLevel::DEBUG, message)
    }

    /// Log at critical level, then exit the process with status 1
    ///
    /// The exit happens whether or not the line could be written.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_with_context(message, LogContext::new())
    }

    pub fn fatal_with_context(&self, message: impl fmt::Display, context: LogContext) -> ! {
        if let Err(e) = self.log_with_context(PriorityLevel::CRITICAL, message, context) {
            eprintln!("[LOGGER ERROR] Failed to write fatal log line: {}", e);
        }
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &format_args!("{}", self.min_level()))
            .field("destination", &self.handler.destination_name())
            .field("context_fields", &self.context.len())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use journal_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(PriorityLevel::NOTICE)
///     .destination(Destination::Stderr)
///     .level_renderer(Arc::new(render_bracketed_name))
///     .field("service", "billing")
///     .build();
///
/// assert_eq!(logger.min_level(), PriorityLevel::NOTICE);
/// ```
pub struct LoggerBuilder {
    min_level: PriorityLevel,
    destination: Destination,
    renderer: Option<LevelRenderer>,
    fields: Vec<(String, FieldValue)>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: PriorityLevel::DEBUG,
            destination: Destination::Stdout,
            renderer: None,
            fields: Vec::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: PriorityLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Read the minimum level from an environment variable
    ///
    /// An unset variable keeps the current level. Accepts the same spellings
    /// as `PriorityLevel::from_str`.
    ///
    /// # Example
    ///
    /// ```
    /// use journal_logger::prelude::*;
    ///
    /// std::env::set_var("BILLING_LOG_LEVEL", "warning");
    /// let logger = Logger::builder()
    ///     .min_level_from_env("BILLING_LOG_LEVEL")?
    ///     .build();
    /// assert_eq!(logger.min_level(), PriorityLevel::WARNING);
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn min_level_from_env(mut self, var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) => {
                self.min_level = value.parse()?;
                Ok(self)
            }
            Err(std::env::VarError::NotPresent) => Ok(self),
            Err(std::env::VarError::NotUnicode(_)) => Err(LoggerError::config(
                "LoggerBuilder",
                format!("{} is not valid unicode", var),
            )),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Write to any byte stream
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.destination = Destination::writer(writer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_renderer(mut self, renderer: LevelRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Add a persistent field written with every entry
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut handler = JournalHandler::new(self.destination);
        if let Some(renderer) = self.renderer {
            handler = handler.with_renderer(renderer);
        }

        let logger = Logger::with_handler(handler);
        logger.set_min_level(self.min_level);
        for (key, value) in self.fields {
            logger.context.set(key, value);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
