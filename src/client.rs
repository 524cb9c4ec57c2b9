//! D4Sign API client.
//!
//! The main entry point for interacting with the D4Sign API.

use crate::auth::Credentials;
use crate::certificates::CertificatesClient;
use crate::documents::DocumentsClient;
use crate::error::Result;
use crate::signatures::SignaturesClient;
use crate::transport::Transport;
use crate::types::{Account, Envelope};
use crate::webhooks::WebhooksClient;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://secure.d4sign.com.br/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// D4Sign API client.
///
/// Cheap to clone; every clone and every resource client shares one
/// underlying transport.
///
/// # Example
///
/// ```rust,no_run
/// use d4sign::D4Sign;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = D4Sign::with_crypt_key("live_xxxxx", "crypt_xxxxx")?;
///
///     let account = client.account().await?;
///     println!("{}", account.message);
///
///     let documents = client.documents().list(1).await?;
///     println!("{} documents", documents.data.unwrap_or_default().len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct D4Sign {
    transport: Arc<Transport>,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Secondary credential sent as `cryptkey`.
    pub crypt_key: Option<String>,
    /// Base URL for the API (default: https://secure.d4sign.com.br/api/v1).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl D4Sign {
    /// Create a new client with default configuration and no crypt key.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use d4sign::D4Sign;
    ///
    /// let client = D4Sign::new("live_xxxxx").unwrap();
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with both credentials.
    pub fn with_crypt_key(api_key: impl Into<String>, crypt_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            api_key,
            ClientConfig {
                crypt_key: Some(crypt_key.into()),
                ..Default::default()
            },
        )
    }

    /// Create a new client with custom configuration.
    ///
    /// Credentials are not checked here; a bad key surfaces as a 401 on the
    /// first call.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use d4sign::{ClientConfig, D4Sign};
    /// use std::time::Duration;
    ///
    /// let client = D4Sign::with_config("live_xxxxx", ClientConfig {
    ///     crypt_key: Some("crypt_xxxxx".to_string()),
    ///     base_url: Some("https://sandbox.d4sign.com.br/api/v1".to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    /// }).unwrap();
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("d4sign-rust/{}", env!("CARGO_PKG_VERSION")));
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let credentials = Credentials::new(api_key.into(), config.crypt_key);
        let transport = Transport::new(base_url, timeout, user_agent, credentials)?;

        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Get account information.
    pub async fn account(&self) -> Result<Envelope<Account>> {
        self.transport.get("/account").await
    }

    /// Get the documents client.
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(Arc::clone(&self.transport))
    }

    /// Get the signatures client.
    pub fn signatures(&self) -> SignaturesClient {
        SignaturesClient::new(Arc::clone(&self.transport))
    }

    /// Get the webhooks client.
    pub fn webhooks(&self) -> WebhooksClient {
        WebhooksClient::new(Arc::clone(&self.transport))
    }

    /// Get the certificates client.
    pub fn certificates(&self) -> CertificatesClient {
        CertificatesClient::new(Arc::clone(&self.transport))
    }
}
