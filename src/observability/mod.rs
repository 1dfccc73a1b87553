//! Observability subsystem.
//!
//! Structured JSON logging with deterministic key ordering. Logging is
//! synchronous, unbuffered, and must never affect the outcome of the
//! operation being logged.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with no extra fields.
pub fn log_event(event: Event) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), &[]);
}

/// Log a lifecycle event with fields.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
