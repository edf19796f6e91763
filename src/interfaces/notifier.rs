// ============================================================================
// Notifier Interface
// Defines the contract for surfacing errors and warnings to the user
// ============================================================================

use parking_lot::Mutex;

/// A message the command wants the user to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Operation aborted
    Error(String),
    /// Operation continues, but the user should know
    Warning(String),
}

/// Notification surface of the host editor
/// Implementations can show popups, write a status bar, log, etc.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);

    fn warning(&self, message: &str);

    /// Dispatch a notice to the matching method
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Error(message) => self.error(message),
            Notice::Warning(message) => self.warning(message),
        }
    }
}

/// No-op notifier for headless use
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn error(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}
}

/// Logging notifier
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn error(&self, message: &str) {
        tracing::error!("Increment: {}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("Increment: {}", message);
    }
}

/// Keeps every notice in order, for tests and batch hosts
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.notices.lock().push(Notice::Error(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.notices
            .lock()
            .push(Notice::Warning(message.to_string()));
    }
}
