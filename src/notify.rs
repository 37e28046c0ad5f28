//! User-facing notifications.
//!
//! The cart reports every failed operation through a [`Notifier`] instead of handing an
//! error to the view that triggered it. Delivery is fire-and-forget.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// Presentation-layer sink for error messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Emits each message as a `warn` event. Used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(notification = message, "Cart notification");
    }
}

/// Keeps every message so tests can assert on them. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
