//! Destinations for evaluation diagnostics.
//!
//! - [`TracingSink`]: emits `tracing::error!` (default)
//! - [`BufferSink`]: captures messages for tests and the driver
//! - [`SilentSink`]: discards everything

use std::sync::Arc;

use parking_lot::Mutex;

/// Receives rendered error messages from failed evaluations.
pub trait DiagnosticSink: Send + Sync {
    fn report_error(&self, message: &str);
}

/// Shared handle stored by engines and cloned into evaluations.
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Forwards to the `tracing` subscriber.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report_error(&self, message: &str) {
        tracing::error!(target: "genex", "{message}");
    }
}

/// Captures messages in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Remove and return captured messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl DiagnosticSink for BufferSink {
    fn report_error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Discards all messages.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report_error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests;
