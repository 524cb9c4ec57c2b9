//! # D4Sign Rust SDK
//!
//! Async Rust client for the D4Sign electronic signature API.
//!
//! Every method maps to one HTTP call and returns the API's response
//! [`Envelope`] as-is. Credentials travel as the `apikey` and `cryptkey`
//! query parameters on every request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use d4sign::{D4Sign, FileUpload, SendToSigner, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = D4Sign::with_crypt_key("live_xxxxx", "crypt_xxxxx")?;
//!
//!     // Upload a contract into a safe
//!     let file = FileUpload::from_path("contract.pdf").await?;
//!     let upload = client.documents().upload("safe-uuid", file, None).await?;
//!     println!("{}", upload.message);
//!
//!     // Add a signer and send it out
//!     client.signatures().add("document-uuid", vec![Signer {
//!         email: "jane@example.com".to_string(),
//!         name: "Jane".to_string(),
//!         ..Default::default()
//!     }]).await?;
//!     client
//!         .documents()
//!         .send_to_signer("document-uuid", SendToSigner::default())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, D4SignError>`. Every failure carries a
//! status code: the HTTP status when the API answered, 0 otherwise.
//!
//! ```rust,no_run
//! use d4sign::D4Sign;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = D4Sign::new("live_xxxxx")?;
//!
//!     match client.account().await {
//!         Ok(account) => println!("{:?}", account.data),
//!         Err(e) if e.is_auth_error() => println!("Invalid API key"),
//!         Err(e) if e.status() == 0 => println!("Network problem: {}", e),
//!         Err(e) => println!("Error {}: {}", e.status(), e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The library never retries; callers decide whether a failure is worth
//! another attempt.

mod auth;
pub mod certificates;
pub mod client;
pub mod documents;
pub mod error;
mod legacy;
pub mod signatures;
mod transport;
pub mod types;
pub mod webhooks;

// Re-export main types at the crate root
pub use client::{ClientConfig, D4Sign};
pub use error::{D4SignError, Result};

pub use types::{
    Account, AddCertificate, BinaryUpload, ChangeEmail, ChangePasswordCode, ChangeSmsNumber,
    Certificate, Document, DownloadLink, Envelope, FileUpload, HashUpload, SendToSigner,
    Signature, Signer, SignerInfo, SignerListEntry, SignerType, SlaveBinaryUpload,
    TemplateDocument, TemplateFields, Webhook,
};
