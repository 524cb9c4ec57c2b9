//! Error types for the D4Sign SDK.
//!
//! Every failed call ends in a single [`D4SignError`] so callers can branch
//! on [`D4SignError::status`] rather than on error identity.

use serde_json::Value;
use thiserror::Error;

/// Result type for D4Sign operations.
pub type Result<T> = std::result::Result<T, D4SignError>;

/// Errors that can occur when using the D4Sign SDK.
#[derive(Error, Debug)]
pub enum D4SignError {
    /// A required identifier was empty. Raised before any request is made.
    #[error("{0} not set")]
    MissingParameter(&'static str),

    /// The API answered with a non-2xx status.
    #[error("D4Sign API Error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server message, or the raw body when the server sent none.
        message: String,
        /// Raw response body.
        data: Value,
    },

    /// The request was sent but no response arrived (timeout, connection failure).
    #[error("D4Sign API Error: No response received - {0}")]
    NoResponse(String),

    /// The request could not be built.
    #[error("D4Sign API Error: {0}")]
    Request(String),

    /// The API answered with a 2xx status but the body is not a valid envelope.
    #[error("D4Sign API Error: {status} - invalid response body: {message}")]
    Decode {
        /// HTTP status code.
        status: u16,
        /// Decoder failure.
        message: String,
        /// Raw response body.
        data: Value,
    },
}

impl D4SignError {
    /// Classify a transport failure.
    ///
    /// Builder errors never left the process; everything else was at least
    /// attempted on the wire. The URL is stripped because it carries the
    /// credential query parameters.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let builder = err.is_builder();
        let description = err.without_url().to_string();
        if builder {
            D4SignError::Request(description)
        } else {
            D4SignError::NoResponse(description)
        }
    }

    /// Classify a non-2xx response.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let data = body_to_value(body);
        let message = match data.get("message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => String::from_utf8_lossy(body).into_owned(),
        };
        D4SignError::Api {
            status,
            message,
            data,
        }
    }

    /// Wrap a 2xx body that failed to decode.
    pub(crate) fn decode(status: u16, body: &[u8], err: serde_json::Error) -> Self {
        D4SignError::Decode {
            status,
            message: err.to_string(),
            data: body_to_value(body),
        }
    }

    /// Returns the HTTP status code, or 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            D4SignError::Api { status, .. } | D4SignError::Decode { status, .. } => *status,
            _ => 0,
        }
    }

    /// Returns the raw response body, if a response was received.
    pub fn data(&self) -> Option<&Value> {
        match self {
            D4SignError::Api { data, .. } | D4SignError::Decode { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Returns the full error message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the API rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            D4SignError::Api { status: 401, .. } | D4SignError::Api { status: 403, .. }
        )
    }
}

fn body_to_value(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
