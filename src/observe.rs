//! Observability sinks for scrubbing diagnostics.
//!
//! The engine reports what it sees through an injected [`LogSink`] instead
//! of a process-wide logger, so the core stays free of global state. The
//! default [`NoopSink`] discards everything; [`FacadeSink`] forwards to the
//! `log` crate macros for applications that already configure a logger;
//! [`MemorySink`] records messages for tests that assert on the stream.

use std::sync::Mutex;

/// Observer for scrubbing diagnostics.
///
/// Every method defaults to a no-op, so implementors only override the
/// levels they care about.
pub trait LogSink {
    /// Fine-grained per-event reporting.
    fn debug(&self, _message: &str) {}

    /// Notable events: anchors, skipped data, unhandled tags.
    fn info(&self, _message: &str) {}

    /// Failures worth surfacing, such as unreadable input files.
    fn error(&self, _message: &str) {}
}

/// Sink that discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl LogSink for NoopSink {}

/// Sink that forwards to the `log` crate macros.
///
/// Use this when the surrounding application already installs a
/// `log`-compatible logger and should see scrubbing diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Sink that records every message in memory, in arrival order.
///
/// Intended for tests asserting on the diagnostic stream. Messages are
/// prefixed with their level.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded message, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    fn record(&self, level: &str, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(format!("{level} {message}"));
        }
    }
}

impl LogSink for MemorySink {
    fn debug(&self, message: &str) {
        self.record("DEBUG", message);
    }

    fn info(&self, message: &str) {
        self.record("INFO", message);
    }

    fn error(&self, message: &str) {
        self.record("ERROR", message);
    }
}
