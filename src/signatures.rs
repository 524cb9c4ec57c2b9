//! Signer operations.
//!
//! This module provides the SignaturesClient for managing who signs a
//! document and how.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{AddSigners, Envelope, SetSignerType, Signature, Signer, SignerType};
use std::sync::Arc;

/// Client for signer operations.
///
/// Access via `client.signatures()`.
#[derive(Debug, Clone)]
pub struct SignaturesClient {
    transport: Arc<Transport>,
}

impl SignaturesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Add signers to a document.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use d4sign::{D4Sign, Signer};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = D4Sign::new("live_xxxxx")?;
    ///
    ///     client.signatures().add("document-uuid", vec![Signer {
    ///         email: "jane@example.com".to_string(),
    ///         name: "Jane".to_string(),
    ///         ..Default::default()
    ///     }]).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn add(&self, document_uuid: &str, signers: Vec<Signer>) -> Result<Envelope> {
        self.transport
            .post(
                &format!("/documents/{}/signers", document_uuid),
                &AddSigners { signers },
            )
            .await
    }

    /// Remove a signer from a document.
    pub async fn remove(&self, document_uuid: &str, email: &str) -> Result<Envelope> {
        self.transport
            .delete(&format!("/documents/{}/signers/{}", document_uuid, email))
            .await
    }

    /// List the signers of a document.
    pub async fn list(&self, document_uuid: &str) -> Result<Envelope<Vec<Signature>>> {
        self.transport
            .get(&format!("/documents/{}/signers", document_uuid))
            .await
    }

    /// Set how a signer authenticates.
    pub async fn set_type(
        &self,
        document_uuid: &str,
        email: &str,
        kind: SignerType,
    ) -> Result<Envelope> {
        self.transport
            .post(
                &format!("/documents/{}/signers/{}/type", document_uuid, email),
                &SetSignerType { kind },
            )
            .await
    }

    /// Send a reminder to a signer.
    pub async fn send_reminder(&self, document_uuid: &str, email: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!(
                "/documents/{}/signers/{}/reminder",
                document_uuid, email
            ))
            .await
    }

    /// Get the signature status of a document.
    pub async fn status(&self, document_uuid: &str) -> Result<Envelope> {
        self.transport
            .get(&format!("/documents/{}/status", document_uuid))
            .await
    }

    /// Create the signature list of a document.
    pub async fn create_list(&self, document_uuid: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!("/documents/{}/signaturelist", document_uuid))
            .await
    }

    /// Cancel a signer's pending signature.
    pub async fn cancel(&self, document_uuid: &str, email: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!(
                "/documents/{}/signers/{}/cancel",
                document_uuid, email
            ))
            .await
    }
}
