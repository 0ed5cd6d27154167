//! Operator log sink for the CLI.

use discourse_logout::{EventLogger, LogEntry, Severity};

/// Emits listener entries as tracing events, keeping `reason` as a field.
///
/// Notices go out at `WARN`, tracing has no notice level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl EventLogger for TracingLogger {
    fn log(&self, entry: LogEntry) {
        let reason = entry.reason.as_str();
        match entry.severity {
            Severity::Error => tracing::error!(reason = %reason, "{}", entry.message),
            Severity::Notice => tracing::warn!(reason = %reason, "{}", entry.message),
        }
    }
}
