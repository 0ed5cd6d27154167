//! Operator-facing log sinks.

mod facade;
mod memory;
mod traits;

pub use facade::FacadeLogger;
pub use memory::MemoryLogger;
pub use traits::{EventLogger, LogEntry, Severity};
