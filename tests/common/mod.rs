//! Helpers shared by the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// In-memory destination that can be inspected after logging
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("log output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
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

/// A parsed `<N>message [json]` line
#[derive(Debug, PartialEq)]
pub struct JournalLine {
    pub priority: i32,
    pub message: String,
    pub fields: Option<serde_json::Value>,
}

/// Parse one output line, treating a trailing ` {...}` as the attribute block
pub fn parse_line(line: &str) -> Option<JournalLine> {
    let rest = line.strip_prefix('<')?;
    let (priority, body) = rest.split_once('>')?;
    let priority = priority.parse().ok()?;

    if let Some(idx) = body.find(" {") {
        if let Ok(fields) = serde_json::from_str::<serde_json::Value>(&body[idx + 1..]) {
            if fields.is_object() {
                return Some(JournalLine {
                    priority,
                    message: body[..idx].to_string(),
                    fields: Some(fields),
                });
            }
        }
    }

    Some(JournalLine {
        priority,
        message: body.to_string(),
        fields: None,
    })
}
