//! In-memory notifier for tests.

use std::sync::Mutex;

use super::Notifier;

/// Keeps every notified message, in order.
///
/// # Example
///
/// ```
/// use hr_portal::notify::{Notifier, RecordingNotifier};
///
/// let notifier = RecordingNotifier::new();
/// notifier.notify("hello");
/// assert_eq!(notifier.messages(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The number of messages received so far.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if nothing has been notified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
