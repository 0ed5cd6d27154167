//! Logger backed by the `log` facade.

use super::traits::{EventLogger, LogEntry, Severity};

/// Forwards entries to whatever `log` backend the host installed.
///
/// Notices are emitted at `warn`, the closest `log` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeLogger;

impl FacadeLogger {
    pub fn new() -> Self {
        Self
    }
}

impl EventLogger for FacadeLogger {
    fn log(&self, entry: LogEntry) {
        let reason: &str = &entry.reason;
        match entry.severity {
            Severity::Error => log::error!(reason = reason; "{}", entry.message),
            Severity::Notice => log::warn!(reason = reason; "{}", entry.message),
        }
    }
}
