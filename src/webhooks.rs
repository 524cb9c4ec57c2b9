//! Webhook operations.
//!
//! Webhooks are registered per document and called by D4Sign when the
//! document's status changes.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{Envelope, RegisterWebhook, UpdateWebhook, Webhook};
use std::sync::Arc;

/// Client for webhook operations.
///
/// Access via `client.webhooks()`.
#[derive(Debug, Clone)]
pub struct WebhooksClient {
    transport: Arc<Transport>,
}

impl WebhooksClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the webhooks of a document.
    pub async fn list(&self, document_key: &str) -> Result<Envelope<Vec<Webhook>>> {
        self.transport
            .get(&format!("/documents/{}/webhooks", document_key))
            .await
    }

    /// Register a webhook URL on a document.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use d4sign::D4Sign;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = D4Sign::new("live_xxxxx")?;
    ///
    ///     client
    ///         .webhooks()
    ///         .register("document-uuid", "https://example.com/d4sign")
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn register(&self, document_key: &str, url: &str) -> Result<Envelope> {
        let request = RegisterWebhook {
            url: url.to_string(),
        };
        self.transport
            .post(&format!("/documents/{}/webhooks", document_key), &request)
            .await
    }

    /// Point an existing webhook at a new URL.
    pub async fn update(
        &self,
        document_key: &str,
        webhook_id: &str,
        url: &str,
    ) -> Result<Envelope<Webhook>> {
        let request = UpdateWebhook {
            url: url.to_string(),
        };
        self.transport
            .put(
                &format!("/documents/{}/webhooks/{}", document_key, webhook_id),
                &request,
            )
            .await
    }

    /// Remove a webhook from a document.
    pub async fn delete(&self, document_key: &str, webhook_id: &str) -> Result<Envelope> {
        self.transport
            .delete(&format!("/documents/{}/webhooks/{}", document_key, webhook_id))
            .await
    }

    /// Resume deliveries to a webhook.
    pub async fn enable(&self, document_key: &str, webhook_id: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!(
                "/documents/{}/webhooks/{}/enable",
                document_key, webhook_id
            ))
            .await
    }

    /// Stop deliveries to a webhook without removing it.
    pub async fn disable(&self, document_key: &str, webhook_id: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!(
                "/documents/{}/webhooks/{}/disable",
                document_key, webhook_id
            ))
            .await
    }
}
