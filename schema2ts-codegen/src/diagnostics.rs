//! Diagnostics sinks for conversion warnings and debug notes.

use parking_lot::Mutex;

/// Receives messages produced while converting schemas.
pub trait Diagnostics: Send + Sync {
    /// A recoverable problem, such as a field that was omitted.
    fn warn(&self, message: &str);

    /// A trace note, only sent when debug output is enabled.
    fn debug(&self, message: &str);
}

/// Forwards messages to `tracing`.
///
/// Without an installed subscriber this does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Diagnostics for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Recoverable problem.
    Warn,
    /// Trace note.
    Debug,
}

/// A recorded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// Message text.
    pub message: String,
}

/// Records every message in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages in order.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    /// Returns recorded warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }

    /// Returns recorded debug notes.
    #[must_use]
    pub fn debug_messages(&self) -> Vec<String> {
        self.messages(Level::Debug)
    }

    /// Clears all recorded messages.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|d| d.level == level)
            .map(|d| d.message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.records.lock().push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }
}

impl Diagnostics for CollectingSink {
    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }
}
