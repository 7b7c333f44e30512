//! Journal line handler
//!
//! Turns one [`LogEntry`] into one line of the form
//!
//! ```text
//! <N>message
//! <N>message {"key":"value"}
//! ```
//!
//! and writes it to the destination in a single call.

use super::destination::Destination;
use crate::core::{default_renderer, LevelRenderer, LogEntry, LoggerError, Result};
use parking_lot::{Mutex, RwLock};

pub struct JournalHandler {
    destination: Mutex<Destination>,
    renderer: RwLock<LevelRenderer>,
}

impl JournalHandler {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination: Mutex::new(destination),
            renderer: RwLock::new(default_renderer()),
        }
    }

    /// Handler writing to standard output
    pub fn stdout() -> Self {
        Self::new(Destination::Stdout)
    }

    #[must_use]
    pub fn with_renderer(self, renderer: LevelRenderer) -> Self {
        *self.renderer.write() = renderer;
        self
    }

    /// Replace the level renderer for all subsequent lines
    pub fn set_renderer(&self, renderer: LevelRenderer) {
        *self.renderer.write() = renderer;
    }

    pub fn renderer(&self) -> LevelRenderer {
        self.renderer.read().clone()
    }

    /// Compose the full line for an entry, including the trailing newline
    ///
    /// Fails only when the attributes cannot be encoded.
    pub fn format(&self, entry: &LogEntry) -> Result<String> {
        let renderer = self.renderer();
        let mut line = renderer(entry.priority());
        line.push_str(&entry.message);

        if !entry.context.is_empty() {
            let fields = entry.context.to_json()?;
            line.push(' ');
            line.push_str(&fields);
        }

        line.push('\n');
        Ok(line)
    }

    /// Format and write one entry
    ///
    /// Composition happens before the destination lock is taken; only the
    /// write itself is serialized. Nothing is written if encoding fails.
    pub fn handle(&self, entry: &LogEntry) -> Result<()> {
        let line = self.format(entry)?;

        self.destination
            .lock()
            .write_line(line.as_bytes())
            .map_err(|e| {
                LoggerError::io_operation("writing log line", "destination rejected the write", e)
            })
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.lock().flush().map_err(|e| {
            LoggerError::io_operation("flushing destination", "destination rejected the flush", e)
        })
    }

    pub fn destination_name(&self) -> String {
        self.destination.lock().name().to_string()
    }
}

impl Default for JournalHandler {
    fn default() -> Self {
        Self::stdout()
    }
}
