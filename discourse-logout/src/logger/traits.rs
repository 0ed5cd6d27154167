//! Log sink trait definitions.

use serde::Serialize;
use std::fmt;

/// Severity of an operator log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The forum account could not be resolved.
    Error,
    /// The forum refused or failed the logout itself.
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Notice => write!(f, "notice"),
        }
    }
}

/// A human message plus the structured `reason` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
    pub reason: String,
}

impl LogEntry {
    /// Create an error entry.
    pub fn error(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            reason: reason.into(),
        }
    }

    /// Create a notice entry.
    pub fn notice(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            severity: Severity::Notice,
            message: message.into(),
            reason: reason.into(),
        }
    }
}

/// Destination for entries the listener reports to operators.
pub trait EventLogger: Send + Sync {
    /// Record one entry.
    fn log(&self, entry: LogEntry);

    /// Record an error entry.
    fn error(&self, message: &str, reason: &str) {
        self.log(LogEntry::error(message, reason));
    }

    /// Record a notice entry.
    fn notice(&self, message: &str, reason: &str) {
        self.log(LogEntry::notice(message, reason));
    }
}
