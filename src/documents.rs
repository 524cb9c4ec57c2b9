//! Document operations.
//!
//! This module provides the DocumentsClient for listing, uploading,
//! dispatching and managing documents. Most write endpoints here run the
//! API's legacy parser; their payload records mark each field that must be
//! sent double JSON-encoded.

use crate::error::{D4SignError, Result};
use crate::legacy;
use crate::transport::Transport;
use crate::types::{
    BinaryUpload, CancelDocument, ChangeEmail, ChangePasswordCode, ChangeSmsNumber,
    CreateSignerList, Document, DownloadLink, Envelope, FileUpload, HashUpload, PageQuery,
    RemoveEmail, ResendDocument, SendToSigner, SignerInfo, SignerListEntry, SlaveBinaryUpload,
    TemplateDocument,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::multipart::Form;
use serde::Serialize;
use std::sync::Arc;

/// Client for document operations.
///
/// Access via `client.documents()`.
#[derive(Debug, Clone)]
pub struct DocumentsClient {
    transport: Arc<Transport>,
}

fn require(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        Err(D4SignError::MissingParameter(name))
    } else {
        Ok(())
    }
}

impl DocumentsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List documents in the account, one page at a time.
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
    ///     let page = client.documents().list(1).await?;
    ///     for doc in page.data.unwrap_or_default() {
    ///         println!("{}: {:?}", doc.uuid, doc.name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, page: u32) -> Result<Envelope<Vec<Document>>> {
        self.transport
            .get_with_query("/documents", &PageQuery { pg: page })
            .await
    }

    /// Get a single document by key.
    pub async fn get(&self, document_key: &str) -> Result<Envelope<Document>> {
        self.transport
            .get(&format!("/documents/{}", document_key))
            .await
    }

    /// Find documents, restricted to one document when `document_key` is
    /// not empty.
    pub async fn find(&self, document_key: &str, page: u32) -> Result<Envelope<Vec<Document>>> {
        let path = if document_key.is_empty() {
            "/documents".to_string()
        } else {
            format!("/documents/{}", document_key)
        };
        self.transport
            .get_with_query(&path, &PageQuery { pg: page })
            .await
    }

    /// List the signers of a document.
    pub async fn list_signatures(&self, document_key: &str) -> Result<Envelope> {
        self.transport
            .get(&format!("/documents/{}/list", document_key))
            .await
    }

    /// List documents in a given status (numeric status id).
    pub async fn by_status(&self, status: &str, page: u32) -> Result<Envelope<Vec<Document>>> {
        self.transport
            .get_with_query(
                &format!("/documents/{}/status", status),
                &PageQuery { pg: page },
            )
            .await
    }

    /// List documents stored in a safe, optionally inside one folder.
    pub async fn in_safe(
        &self,
        safe_key: &str,
        uuid_folder: Option<&str>,
        page: u32,
    ) -> Result<Envelope<Vec<Document>>> {
        self.transport
            .get_with_query(
                &format!("/documents/{}/safe/{}", safe_key, uuid_folder.unwrap_or("")),
                &PageQuery { pg: page },
            )
            .await
    }

    /// Upload a file into a safe as multipart form data.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use d4sign::{D4Sign, FileUpload};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = D4Sign::with_crypt_key("live_xxxxx", "crypt_xxxxx")?;
    ///
    ///     let file = FileUpload::from_path("contract.pdf").await?;
    ///     let result = client.documents().upload("safe-uuid", file, None).await?;
    ///     println!("{}", result.message);
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload(
        &self,
        uuid_safe: &str,
        file: FileUpload,
        uuid_folder: Option<&str>,
    ) -> Result<Envelope> {
        require(uuid_safe, "UUID safe")?;

        let mut form = Form::new().part("file", file.into_part()?);
        if let Some(folder) = uuid_folder.filter(|f| !f.is_empty()) {
            let folder = legacy::quote(folder).map_err(|e| D4SignError::Request(e.to_string()))?;
            form = form.text("uuid_folder", folder);
        }

        self.transport
            .post_multipart(&format!("/documents/{}/upload", uuid_safe), form)
            .await
    }

    /// Upload a document held in memory, sent as base64 JSON.
    pub async fn upload_binary(&self, uuid_safe: &str, upload: BinaryUpload) -> Result<Envelope> {
        #[derive(Serialize)]
        struct Request {
            base64_binary_file: String,
            mime_type: String,
            name: String,
            #[serde(serialize_with = "legacy::quoted")]
            uuid_folder: String,
        }

        require(uuid_safe, "UUID safe")?;

        let request = Request {
            base64_binary_file: BASE64.encode(&upload.bytes),
            mime_type: upload.mime_type,
            name: upload.name,
            uuid_folder: upload.uuid_folder,
        };

        self.transport
            .post(&format!("/documents/{}/uploadbinary", uuid_safe), &request)
            .await
    }

    /// Attach a file to an existing document.
    pub async fn upload_slave(&self, uuid_original_file: &str, file: FileUpload) -> Result<Envelope> {
        require(uuid_original_file, "UUID original file")?;

        let form = Form::new().part("file", file.into_part()?);
        self.transport
            .post_multipart(
                &format!("/documents/{}/uploadslave", uuid_original_file),
                form,
            )
            .await
    }

    /// Attach an in-memory file to an existing document.
    pub async fn upload_slave_binary(
        &self,
        uuid_master: &str,
        upload: SlaveBinaryUpload,
    ) -> Result<Envelope> {
        #[derive(Serialize)]
        struct Request {
            base64_binary_file: String,
            mime_type: String,
            name: String,
        }

        require(uuid_master, "UUID master document")?;

        let request = Request {
            base64_binary_file: BASE64.encode(&upload.bytes),
            mime_type: upload.mime_type,
            name: upload.name,
        };

        self.transport
            .post(
                &format!("/documents/{}/uploadslavebinary", uuid_master),
                &request,
            )
            .await
    }

    /// Register a document by its SHA-256 and SHA-512 digests.
    pub async fn upload_hash(&self, uuid_safe: &str, upload: HashUpload) -> Result<Envelope> {
        require(uuid_safe, "UUID safe")?;
        self.transport
            .post(&format!("/documents/{}/uploadhash", uuid_safe), &upload)
            .await
    }

    /// Delete a document.
    pub async fn delete(&self, document_key: &str) -> Result<Envelope> {
        self.transport
            .delete(&format!("/documents/{}", document_key))
            .await
    }

    /// Cancel a document, with an optional comment.
    pub async fn cancel(&self, document_key: &str, comment: &str) -> Result<Envelope> {
        let request = CancelDocument {
            comment: comment.to_string(),
        };
        self.transport
            .post(&format!("/documents/{}/cancel", document_key), &request)
            .await
    }

    /// Send a document to its signers.
    pub async fn send_to_signer(
        &self,
        document_key: &str,
        request: SendToSigner,
    ) -> Result<Envelope> {
        self.transport
            .post(&format!("/documents/{}/sendtosigner", document_key), &request)
            .await
    }

    /// Get a temporary download link for a document.
    pub async fn download_link(&self, document_key: &str, request: DownloadLink) -> Result<Envelope> {
        self.transport
            .post(&format!("/documents/{}/download", document_key), &request)
            .await
    }

    /// Create the signer list of a document.
    pub async fn create_signer_list(
        &self,
        document_key: &str,
        signers: Vec<SignerListEntry>,
        skip_email: bool,
    ) -> Result<Envelope> {
        let request = CreateSignerList {
            signers,
            skip_email,
        };
        self.transport
            .post(&format!("/documents/{}/createlist", document_key), &request)
            .await
    }

    /// Generate a document from HTML templates into a safe.
    pub async fn from_template(&self, safe_key: &str, request: TemplateDocument) -> Result<Envelope> {
        self.transport
            .post(
                &format!("/documents/{}/makedocumentbytemplate", safe_key),
                &request,
            )
            .await
    }

    /// Generate a document from Word templates into a safe.
    pub async fn from_word_template(
        &self,
        safe_key: &str,
        request: TemplateDocument,
    ) -> Result<Envelope> {
        self.transport
            .post(
                &format!("/documents/{}/makedocumentbytemplateword", safe_key),
                &request,
            )
            .await
    }

    /// Attach display information to a signer.
    pub async fn add_signer_info(&self, document_key: &str, request: SignerInfo) -> Result<Envelope> {
        self.transport
            .post(&format!("/documents/{}/addinfo", document_key), &request)
            .await
    }

    /// Resend the signature request to a signer.
    pub async fn resend(&self, document_key: &str, email: &str, key_signer: &str) -> Result<Envelope> {
        let request = ResendDocument {
            email: email.to_string(),
            key_signer: key_signer.to_string(),
        };
        self.transport
            .post(&format!("/documents/{}/resend", document_key), &request)
            .await
    }

    /// Replace a signer's email address.
    pub async fn change_email(&self, document_key: &str, request: ChangeEmail) -> Result<Envelope> {
        self.transport
            .post(&format!("/documents/{}/changeemail", document_key), &request)
            .await
    }

    /// Replace the number a signer receives SMS tokens on.
    pub async fn change_sms_number(
        &self,
        document_key: &str,
        request: ChangeSmsNumber,
    ) -> Result<Envelope> {
        self.transport
            .post(
                &format!("/documents/{}/changesmsnumber", document_key),
                &request,
            )
            .await
    }

    /// Replace the access code a signer must enter.
    pub async fn change_password_code(
        &self,
        document_key: &str,
        request: ChangePasswordCode,
    ) -> Result<Envelope> {
        self.transport
            .post(
                &format!("/documents/{}/changepasswordcode", document_key),
                &request,
            )
            .await
    }

    /// Remove a signer from the document's signer list.
    pub async fn remove_email(
        &self,
        document_key: &str,
        email_signer: &str,
        key_signer: &str,
    ) -> Result<Envelope> {
        let request = RemoveEmail {
            email_signer: email_signer.to_string(),
            key_signer: key_signer.to_string(),
        };
        self.transport
            .post(
                &format!("/documents/{}/removeemaillist", document_key),
                &request,
            )
            .await
    }
}
