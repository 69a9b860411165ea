//! Outbound notifications.
//!
//! Notifications are fire-and-forget: [`Notifier::notify`] never fails and
//! never blocks on delivery. The portal service holds one as an injected
//! `Arc<dyn Notifier>`.

mod recording;
mod webhook;

use tracing::info;

pub use recording::RecordingNotifier;
pub use webhook::{WebhookNotifier, WebhookPayload};

/// A best-effort message sink.
pub trait Notifier: Send + Sync {
    /// Dispatches `message`. Delivery failures are logged, not returned.
    fn notify(&self, message: &str);
}

/// A notifier that only writes the message to the log.
///
/// Used when no webhook is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!(notification = %message, "Notification (no webhook configured)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_accepts_messages() {
        let notifier: &dyn Notifier = &LogNotifier;
        notifier.notify("Ann has checked in at 09:00:00 UTC");
    }
}
