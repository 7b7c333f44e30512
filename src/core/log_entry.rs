//! Log entry structure

use super::log_context::LogContext;
use super::priority::{PriorityLevel, Severity};

/// One log event, alive for a single handler call
///
/// The entry carries the severity on the logger's internal scale; the
/// handler derives the journal priority back from it when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
    pub context: LogContext,
}

impl LogEntry {
    pub fn new(level: PriorityLevel, message: impl Into<String>) -> Self {
        Self::with_severity(level.to_severity(), message)
    }

    pub fn with_severity(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            context: LogContext::new(),
        }
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Priority level derived from the entry's severity
    #[inline]
    pub fn priority(&self) -> PriorityLevel {
        PriorityLevel::from_severity(self.severity)
    }
}
