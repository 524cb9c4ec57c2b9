//! Basic usage example for the D4Sign SDK.
//!
//! This example demonstrates:
//! - Creating a client from environment credentials
//! - Reading account information
//! - Listing documents
//! - Uploading a file into a safe (when `SAFE_UUID` and `UPLOAD_FILE` are set)
//!
//! Run with:
//! ```bash
//! D4SIGN_API_KEY=live_xxx D4SIGN_CRYPT_KEY=crypt_xxx RUST_LOG=d4sign=debug \
//!     cargo run --example basic
//! ```

use d4sign::{ClientConfig, D4Sign, FileUpload};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("D4SIGN_API_KEY")
        .map_err(|_| "D4SIGN_API_KEY environment variable required")?;

    let client = D4Sign::with_config(
        api_key,
        ClientConfig {
            crypt_key: std::env::var("D4SIGN_CRYPT_KEY").ok(),
            base_url: std::env::var("D4SIGN_API_URL").ok(),
            ..Default::default()
        },
    )?;

    println!("Account information:");
    let account = client.account().await?;
    println!("{}", serde_json::to_string_pretty(&account)?);

    println!("\nDocuments (page 1):");
    let documents = client.documents().list(1).await?;
    for doc in documents.data.unwrap_or_default() {
        println!(
            "  {}  {}  [{}]",
            doc.uuid,
            doc.name.as_deref().unwrap_or("-"),
            doc.status.as_deref().unwrap_or("-")
        );
    }

    if let (Ok(safe), Ok(file)) = (std::env::var("SAFE_UUID"), std::env::var("UPLOAD_FILE")) {
        println!("\nUploading {}...", file);
        let upload = FileUpload::from_path(&file).await?;
        match client.documents().upload(&safe, upload, None).await {
            Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            Err(e) => println!("Upload failed (status {}): {}", e.status(), e),
        }
    }

    Ok(())
}
