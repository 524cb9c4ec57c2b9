//! Digital certificate operations.
//!
//! Certificates are attached to a signer of a specific document.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{AddCertificate, Certificate, CertificateQuery, Envelope};
use std::sync::Arc;

/// Client for certificate operations.
///
/// Access via `client.certificates()`.
#[derive(Debug, Clone)]
pub struct CertificatesClient {
    transport: Arc<Transport>,
}

impl CertificatesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the certificates of a signer on a document.
    pub async fn list(
        &self,
        document_uuid: &str,
        key_signer: &str,
    ) -> Result<Envelope<Vec<Certificate>>> {
        let request = CertificateQuery {
            key_signer: key_signer.to_string(),
        };
        self.transport
            .post(&format!("/certificate/{}/list", document_uuid), &request)
            .await
    }

    /// Fetch one certificate.
    pub async fn get(&self, document_uuid: &str, certificate_id: &str) -> Result<Envelope<Certificate>> {
        self.transport
            .get(&format!("/certificate/{}/{}", document_uuid, certificate_id))
            .await
    }

    /// Attach a certificate to a signer.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use d4sign::{AddCertificate, D4Sign};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = D4Sign::new("live_xxxxx")?;
    ///
    ///     client.certificates().create("document-uuid", AddCertificate {
    ///         key_signer: "signer-key".to_string(),
    ///         document_type: "PF".to_string(),
    ///         document_number: "12345678900".to_string(),
    ///         ..Default::default()
    ///     }).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, document_uuid: &str, request: AddCertificate) -> Result<Envelope> {
        self.transport
            .post(&format!("/certificate/{}/add", document_uuid), &request)
            .await
    }

    /// Detach a certificate from its signer.
    pub async fn delete(&self, document_uuid: &str, certificate_id: &str) -> Result<Envelope> {
        self.transport
            .delete(&format!("/certificate/{}/{}", document_uuid, certificate_id))
            .await
    }

    /// Re-enable a disabled certificate.
    pub async fn enable(&self, document_uuid: &str, certificate_id: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!(
                "/certificate/{}/{}/enable",
                document_uuid, certificate_id
            ))
            .await
    }

    /// Disable a certificate without removing it.
    pub async fn disable(&self, document_uuid: &str, certificate_id: &str) -> Result<Envelope> {
        self.transport
            .post_empty(&format!(
                "/certificate/{}/{}/disable",
                document_uuid, certificate_id
            ))
            .await
    }
}
