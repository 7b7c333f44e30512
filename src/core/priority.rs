//! Priority level definitions and the mapping to the framework severity scale
//!
//! Two scales meet here:
//!
//! - [`PriorityLevel`]: the syslog/journal scale the collector understands,
//!   `0` (emergency) through `7` (debug). Smaller is more severe.
//! - [`Severity`]: the logger's internal scale used for level gating.
//!   Larger is more severe, `0` is the info origin and debug is negative.
//!
//! The two are related by `severity = INFO_ORIGIN - priority`. The mapping
//! is total in both directions: a severity far outside the band of the
//! eight named levels yields a priority outside `0..=7`, which is still
//! rendered verbatim.
//!
//! See <https://wiki.archlinux.org/title/Systemd/Journal#Priority_level>.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric priority of `PriorityLevel::INFO`, mapped to `Severity::INFO` (0)
pub const INFO_ORIGIN: i32 = 6;

/// A syslog/journal priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityLevel(i32);

impl PriorityLevel {
    /// System is unusable. Applications should not use this level.
    pub const EMERGENCY: Self = Self(0);
    /// Should be corrected immediately
    pub const ALERT: Self = Self(1);
    /// Critical conditions; vital subsystem goes out of work, data loss, etc.
    pub const CRITICAL: Self = Self(2);
    /// Error conditions; non-fatal error reported
    pub const ERROR: Self = Self(3);
    /// May indicate that an error will occur if action is not taken
    pub const WARNING: Self = Self(4);
    /// Events that are unusual, but not error conditions
    pub const NOTICE: Self = Self(5);
    /// Normal operational messages that require no action
    pub const INFO: Self = Self(6);
    /// Messages which may need to be enabled first, only useful for debugging
    pub const DEBUG: Self = Self(7);

    /// The eight named levels, most severe first
    pub const ALL: [Self; 8] = [
        Self::EMERGENCY,
        Self::ALERT,
        Self::CRITICAL,
        Self::ERROR,
        Self::WARNING,
        Self::NOTICE,
        Self::INFO,
        Self::DEBUG,
    ];

    /// Wrap a raw priority value without range checks
    #[must_use]
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Translate into the framework severity scale
    #[must_use]
    pub const fn to_severity(self) -> Severity {
        Severity(INFO_ORIGIN.wrapping_sub(self.0))
    }

    /// Translate back from the framework severity scale. Not clamped.
    #[must_use]
    pub const fn from_severity(severity: Severity) -> Self {
        Self(INFO_ORIGIN.wrapping_sub(severity.0))
    }

    /// True for the eight named levels
    #[must_use]
    pub const fn is_named(self) -> bool {
        self.0 >= 0 && self.0 <= 7
    }

    /// Whether an event at `self` passes a threshold set to `threshold`
    #[inline]
    #[must_use]
    pub fn is_at_least(self, threshold: PriorityLevel) -> bool {
        self.to_severity() >= threshold.to_severity()
    }

    /// The journal keyword for named levels
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("emerg"),
            1 => Some("alert"),
            2 => Some("crit"),
            3 => Some("err"),
            4 => Some("warning"),
            5 => Some("notice"),
            6 => Some("info"),
            7 => Some("debug"),
            _ => None,
        }
    }
}

impl Default for PriorityLevel {
    fn default() -> Self {
        Self::DEBUG
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for PriorityLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "emerg" | "emergency" | "panic" => Ok(Self::EMERGENCY),
            "alert" => Ok(Self::ALERT),
            "crit" | "critical" => Ok(Self::CRITICAL),
            "err" | "error" => Ok(Self::ERROR),
            "warning" | "warn" => Ok(Self::WARNING),
            "notice" => Ok(Self::NOTICE),
            "info" | "informational" => Ok(Self::INFO),
            "debug" => Ok(Self::DEBUG),
            other => match other.parse::<i32>() {
                Ok(value) if Self(value).is_named() => Ok(Self(value)),
                _ => Err(LoggerError::invalid_level(s)),
            },
        }
    }
}

/// Severity on the logger's internal scale; larger is more severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(i32);

impl Severity {
    pub const EMERGENCY: Self = PriorityLevel::EMERGENCY.to_severity();
    pub const ALERT: Self = PriorityLevel::ALERT.to_severity();
    pub const CRITICAL: Self = PriorityLevel::CRITICAL.to_severity();
    pub const ERROR: Self = PriorityLevel::ERROR.to_severity();
    pub const WARNING: Self = PriorityLevel::WARNING.to_severity();
    pub const NOTICE: Self = PriorityLevel::NOTICE.to_severity();
    pub const INFO: Self = PriorityLevel::INFO.to_severity();
    pub const DEBUG: Self = PriorityLevel::DEBUG.to_severity();

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn priority(self) -> PriorityLevel {
        PriorityLevel::from_severity(self)
    }
}

impl From<PriorityLevel> for Severity {
    fn from(level: PriorityLevel) -> Self {
        level.to_severity()
    }
}

impl From<Severity> for PriorityLevel {
    fn from(severity: Severity) -> Self {
        PriorityLevel::from_severity(severity)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
