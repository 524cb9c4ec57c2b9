//! Type definitions for the D4Sign SDK.
//!
//! This module contains the response envelope, the records the API returns,
//! and one request record per endpoint payload. Records mirror the API JSON
//! verbatim: every field is optional and attributes without a typed field
//! are kept in `extra`.

use crate::error::{D4SignError, Result};
use crate::legacy;
use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256, Sha512};
use std::collections::BTreeMap;
use std::path::Path;

/// Envelope wrapping every D4Sign response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope<T = Value> {
    /// Whether the API accepted the operation.
    #[serde(default)]
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Operation payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Account information.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_total: Option<u64>,
    /// Attributes without a typed field, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Document {
    /// Document key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Folder the document is stored in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<Signature>>,
    /// Attributes without a typed field, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A signature on a document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Signature {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Attributes without a typed field, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A webhook registered on a document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Webhook {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Attributes without a typed field, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A digital certificate attached to a signer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Certificate {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Certificate type (e.g. "icp_brasil").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Attributes without a typed field, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `pg` query parameter for paged listings.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct PageQuery {
    pub pg: u32,
}

// ---------------------------------------------------------------------------
// Document payloads
// ---------------------------------------------------------------------------

/// A file to send as a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name reported to the API.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
    /// Optional MIME type for the part.
    pub mime_type: Option<String>,
}

impl FileUpload {
    /// Upload `bytes` under `file_name`.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime_type: None,
        }
    }

    /// Read a file from disk, using its base name as the upload name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| D4SignError::Request(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, bytes))
    }

    pub(crate) fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(D4SignError::from_transport),
            None => Ok(part),
        }
    }
}

/// A document sent inline as base64.
#[derive(Debug, Clone, Default)]
pub struct BinaryUpload {
    /// Raw file contents; encoded to base64 on the wire.
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub name: String,
    /// Destination folder; empty for the safe's root.
    pub uuid_folder: String,
}

/// An attachment sent inline as base64 and linked to a master document.
#[derive(Debug, Clone, Default)]
pub struct SlaveBinaryUpload {
    /// Raw file contents; encoded to base64 on the wire.
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub name: String,
}

/// A document registered by its hashes only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HashUpload {
    /// Hex-encoded SHA-256 digest.
    pub sha256: String,
    /// Hex-encoded SHA-512 digest.
    pub sha512: String,
    pub name: String,
    /// Destination folder; empty for the safe's root.
    #[serde(serialize_with = "legacy::quoted")]
    pub uuid_folder: String,
}

impl HashUpload {
    /// Hash `bytes` locally so only the digests leave the process.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            sha256: hex::encode(Sha256::digest(bytes)),
            sha512: hex::encode(Sha512::digest(bytes)),
            name: name.into(),
            uuid_folder: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CancelDocument {
    #[serde(serialize_with = "legacy::quoted")]
    pub(crate) comment: String,
}

/// Options for sending a document to its signers.
#[derive(Debug, Clone, Serialize)]
pub struct SendToSigner {
    /// Message included in the signature request email.
    #[serde(serialize_with = "legacy::quoted")]
    pub message: String,
    /// "0" for any order, "1" for sequential signing.
    #[serde(serialize_with = "legacy::quoted")]
    pub workflow: String,
    /// Suppress the notification email.
    #[serde(serialize_with = "legacy::quoted")]
    pub skip_email: bool,
}

impl Default for SendToSigner {
    fn default() -> Self {
        Self {
            message: String::new(),
            workflow: "0".to_string(),
            skip_email: false,
        }
    }
}

/// Download link request.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadLink {
    /// File type, e.g. "pdf" or "zip".
    #[serde(rename = "type", serialize_with = "legacy::quoted")]
    pub kind: String,
}

/// Signer entry for a document's signer list.
///
/// Flags are sent as the API's "0"/"1" strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignerListEntry {
    pub email: String,
    /// Signing action ("1" sign, "2" approve, "3" acknowledge, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub act: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificadoicpbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assinatura_presencial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docauth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docauthandselfie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_methodauth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_smsnumber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_allow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_obs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateSignerList {
    #[serde(serialize_with = "legacy::quoted")]
    pub(crate) signers: Vec<SignerListEntry>,
    #[serde(serialize_with = "legacy::quoted")]
    pub(crate) skip_email: bool,
}

/// Template variables keyed by template id, then by variable name.
pub type TemplateFields = BTreeMap<String, BTreeMap<String, String>>;

/// Document generated from a template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateDocument {
    #[serde(serialize_with = "legacy::quoted")]
    pub templates: TemplateFields,
    #[serde(serialize_with = "legacy::quoted")]
    pub name_document: String,
    /// Destination folder; empty for the safe's root.
    #[serde(serialize_with = "legacy::quoted")]
    pub uuid_folder: String,
}

/// Extra information for a signer of a document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignerInfo {
    #[serde(serialize_with = "legacy::quoted")]
    pub key_signer: String,
    #[serde(serialize_with = "legacy::quoted")]
    pub email: String,
    #[serde(serialize_with = "legacy::quoted")]
    pub display_name: String,
    #[serde(serialize_with = "legacy::quoted")]
    pub documentation: String,
    #[serde(serialize_with = "legacy::quoted")]
    pub birthday: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct ResendDocument {
    #[serde(serialize_with = "legacy::quoted")]
    pub(crate) email: String,
    #[serde(serialize_with = "legacy::quoted")]
    pub(crate) key_signer: String,
}

/// Replace a signer's email address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeEmail {
    #[serde(rename = "email-before", serialize_with = "legacy::quoted")]
    pub email_before: String,
    #[serde(rename = "email-after", serialize_with = "legacy::quoted")]
    pub email_after: String,
    #[serde(rename = "key-signer", serialize_with = "legacy::quoted")]
    pub key_signer: String,
}

/// Replace a signer's SMS number.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeSmsNumber {
    #[serde(serialize_with = "legacy::quoted")]
    pub email: String,
    #[serde(rename = "sms-number", serialize_with = "legacy::quoted")]
    pub sms_number: String,
    #[serde(rename = "key-signer", serialize_with = "legacy::quoted")]
    pub key_signer: String,
}

/// Replace a signer's password code.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangePasswordCode {
    #[serde(serialize_with = "legacy::quoted")]
    pub email: String,
    #[serde(rename = "password-code", serialize_with = "legacy::quoted")]
    pub password_code: String,
    #[serde(rename = "key-signer", serialize_with = "legacy::quoted")]
    pub key_signer: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct RemoveEmail {
    #[serde(rename = "email-signer", serialize_with = "legacy::quoted")]
    pub(crate) email_signer: String,
    #[serde(rename = "key-signer", serialize_with = "legacy::quoted")]
    pub(crate) key_signer: String,
}

// ---------------------------------------------------------------------------
// Signature payloads
// ---------------------------------------------------------------------------

/// How a signer authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignerType {
    Email,
    Phone,
    Certificate,
}

/// A signer to add to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signer {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddSigners {
    pub(crate) signers: Vec<Signer>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct SetSignerType {
    #[serde(rename = "type")]
    pub(crate) kind: SignerType,
}

// ---------------------------------------------------------------------------
// Webhook payloads
// ---------------------------------------------------------------------------

/// Webhook registration. The URL is double-encoded.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RegisterWebhook {
    #[serde(serialize_with = "legacy::quoted")]
    pub(crate) url: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateWebhook {
    pub(crate) url: String,
}

// ---------------------------------------------------------------------------
// Certificate payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CertificateQuery {
    pub(crate) key_signer: String,
}

/// Certificate to attach to a signer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddCertificate {
    pub key_signer: String,
    /// Holder type, e.g. "PF" or "PJ".
    pub document_type: String,
    pub document_number: String,
    /// PAdES flag; empty leaves the server default.
    pub pades: String,
}
