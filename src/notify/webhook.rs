//! Webhook notifier.
//!
//! Posts `{"content": "<message>"}` as JSON to a fixed URL, the payload shape
//! accepted by chat webhooks such as Discord's.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{PortalError, PortalResult};

use super::Notifier;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The JSON body sent to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// The message text.
    pub content: String,
}

/// Sends notifications to a webhook on a background task.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Creates a notifier posting to `url`.
    pub fn new(url: impl Into<String>) -> PortalResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PortalError::NotifierSetup {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The webhook URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, message: &str) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(
                notification = %message,
                "No async runtime available, dropping notification"
            );
            return;
        };

        let client = self.client.clone();
        let url = self.url.clone();
        let payload = WebhookPayload {
            content: message.to_string(),
        };
        runtime.spawn(deliver(client, url, payload));
    }
}

async fn deliver(client: reqwest::Client, url: String, payload: WebhookPayload) {
    match client.post(&url).json(&payload).send().await {
        Ok(response) if response.status().is_success() => {
            debug!(status = %response.status(), "Notification delivered");
        }
        Ok(response) => {
            warn!(status = %response.status(), "Webhook rejected notification");
        }
        Err(e) => {
            error!(error = %e, "Failed to send notification");
        }
    }
}
