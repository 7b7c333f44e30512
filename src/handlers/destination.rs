//! Output streams a handler can write to

use std::fmt;
use std::io::{self, Write};

/// Where formatted lines go
///
/// Every line reaches the stream through a single `write_all` call made
/// while the handler holds its destination lock.
pub enum Destination {
    /// Process standard output, the stream systemd attaches to the journal
    Stdout,
    /// Process standard error
    Stderr,
    /// Any other byte stream: a file, a pipe, an in-memory buffer
    Writer(Box<dyn Write + Send>),
}

impl Destination {
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Destination::Writer(Box::new(writer))
    }

    pub(crate) fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().lock().write_all(line),
            Destination::Stderr => io::stderr().lock().write_all(line),
            Destination::Writer(writer) => writer.write_all(line),
        }
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().flush(),
            Destination::Stderr => io::stderr().flush(),
            Destination::Writer(writer) => writer.flush(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Destination::Stdout => "stdout",
            Destination::Stderr => "stderr",
            Destination::Writer(_) => "writer",
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Destination::Stdout
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Destination").field(&self.name()).finish()
    }
}
