//! Logging macros for format-string entry points.
//!
//! Each macro takes a logger, a format string with arguments as in
//! `format!`, and optionally a `;`-separated list of `key => value`
//! attributes. The message is built with `format_args!`, so suppressed
//! levels never allocate.
//!
//! # Examples
//!
//! ```
//! use journal_logger::prelude::*;
//! use journal_logger::{emergency, info};
//!
//! let logger = Logger::builder().writer(Vec::new()).build();
//!
//! emergency!(logger, "disk at {}%", 97)?;
//! info!(logger, "retrying"; "retries" => 3)?;
//! info!(logger, "connected to {}", "db1"; "port" => 5432, "tls" => true)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use journal_logger::prelude::*;
/// # let logger = Logger::builder().writer(Vec::new()).build();
/// use journal_logger::log;
/// log!(logger, PriorityLevel::NOTICE, "Simple message")?;
/// log!(logger, PriorityLevel::ERROR, "Error code: {}", 500)?;
/// log!(logger, PriorityLevel::INFO, "Cache warmed"; "entries" => 1024)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+) => {
        $logger.log_with_context(
            $level,
            format_args!($fmt $(, $arg)*),
            $crate::LogContext::new()$(.with_field($key, $value))+,
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log an emergency-level (0) message. Applications should not normally use it.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::EMERGENCY, $($arg)+)
    };
}

/// Log an alert-level (1) message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::ALERT, $($arg)+)
    };
}

/// Log a critical-level (2) message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::CRITICAL, $($arg)+)
    };
}

/// Log an error-level (3) message.
///
/// # Examples
///
/// ```
/// # use journal_logger::prelude::*;
/// # let logger = Logger::builder().writer(Vec::new()).build();
/// use journal_logger::error;
/// error!(logger, "Failed to connect to database")?;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::ERROR, $($arg)+)
    };
}

/// Log a warning-level (4) message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::WARNING, $($arg)+)
    };
}

/// Log a notice-level (5) message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::NOTICE, $($arg)+)
    };
}

/// Log an info-level (6) message.
///
/// # Examples
///
/// ```
/// # use journal_logger::prelude::*;
/// # let logger = Logger::builder().writer(Vec::new()).build();
/// use journal_logger::info;
/// info!(logger, "Application started")?;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::INFO, $($arg)+)
    };
}

/// Log a debug-level (7) message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::PriorityLevel::DEBUG, $($arg)+)
    };
}

/// Log at critical level and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use journal_logger::prelude::*;
/// # let logger = Logger::new();
/// use journal_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+) => {
        $logger.fatal_with_context(
            format_args!($fmt $(, $arg)*),
            $crate::LogContext::new()$(.with_field($key, $value))+,
        )
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, LoggerError, PriorityLevel};
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn buffered() -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder().writer(buffer.clone()).build();
        (logger, buffer)
    }

    #[test]
    fn test_log_macro() -> Result<(), LoggerError> {
        let (logger, buffer) = buffered();
        log!(logger, PriorityLevel::NOTICE, "Test message")?;
        log!(logger, PriorityLevel::NOTICE, "Formatted: {}", 42)?;
        assert_eq!(buffer.contents(), "<5>Test message\n<5>Formatted: 42\n");
        Ok(())
    }

    #[test]
    fn test_emergency_format() -> Result<(), LoggerError> {
        let (logger, buffer) = buffered();
        emergency!(logger, "disk at {}%", 97)?;
        assert_eq!(buffer.contents(), "<0>disk at 97%\n");
        Ok(())
    }

    #[test]
    fn test_level_macros() -> Result<(), LoggerError> {
        let (logger, buffer) = buffered();
        alert!(logger, "a{}", 1)?;
        critical!(logger, "c")?;
        error!(logger, "e")?;
        warning!(logger, "w")?;
        notice!(logger, "n")?;
        info!(logger, "i")?;
        debug!(logger, "d {} {}", "x", "y")?;
        assert_eq!(
            buffer.contents(),
            "<1>a1\n<2>c\n<3>e\n<4>w\n<5>n\n<6>i\n<7>d x y\n"
        );
        Ok(())
    }

    #[test]
    fn test_attribute_tail() -> Result<(), LoggerError> {
        let (logger, buffer) = buffered();
        info!(logger, "retrying"; "retries" => 3)?;
        warning!(logger, "slow {}", "query"; "ms" => 1500, "table" => "orders")?;
        assert_eq!(
            buffer.contents(),
            "<6>retrying {\"retries\":3}\n<4>slow query {\"ms\":1500,\"table\":\"orders\"}\n"
        );
        Ok(())
    }

    #[test]
    fn test_inline_format_arguments() -> Result<(), LoggerError> {
        let (logger, buffer) = buffered();
        let port = 8080;
        info!(logger, "listening on {port}")?;
        assert_eq!(buffer.contents(), "<6>listening on 8080\n");
        Ok(())
    }

    #[test]
    fn test_suppressed_macro_writes_nothing() -> Result<(), LoggerError> {
        let (logger, buffer) = buffered();
        logger.set_min_level(PriorityLevel::ERROR);
        debug!(logger, "hidden {}", 1)?;
        debug!(logger, "hidden"; "k" => 1)?;
        assert!(buffer.contents().is_empty());
        Ok(())
    }
}
