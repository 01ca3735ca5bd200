//! Outbound status notifications.
//!
//! Posts a JSON payload to the configured webhook whenever an order status
//! changes. The whole path is best-effort: with no webhook configured it is a
//! no-op, and delivery failures are logged and swallowed so they never
//! surface to the caller.

use serde::Serialize;

use crate::domain::OrderStatus;

/// Payload delivered to the status webhook.
#[derive(Debug, Serialize)]
struct StatusNotification<'a> {
    order_id: i64,
    status: &'a str,
    note: Option<&'a str>,
}

/// Webhook client for order status changes.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Send a status-change notification. Never fails the caller.
    pub async fn order_status_changed(&self, order_id: i64, status: OrderStatus, note: Option<&str>) {
        let Some(url) = &self.webhook_url else {
            return;
        };

        let payload = StatusNotification {
            order_id,
            status: status.as_str(),
            note,
        };

        match self.client.post(url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(order_id, status = %status, "Status notification delivered");
            }
            Ok(response) => {
                tracing::warn!(
                    order_id,
                    status = %response.status(),
                    "Status notification rejected by webhook"
                );
            }
            Err(e) => {
                tracing::warn!(order_id, error = %e, "Status notification failed");
            }
        }
    }
}
