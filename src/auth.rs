//! Credential query parameters attached to every request.

use reqwest::RequestBuilder;

pub(crate) const API_KEY_PARAM: &str = "apikey";
pub(crate) const CRYPT_KEY_PARAM: &str = "cryptkey";

/// API credentials.
///
/// D4Sign authenticates through the query string rather than headers, so
/// both keys end up in the request URL.
#[derive(Clone)]
pub(crate) struct Credentials {
    api_key: String,
    crypt_key: Option<String>,
}

impl Credentials {
    pub(crate) fn new(api_key: String, crypt_key: Option<String>) -> Self {
        Self { api_key, crypt_key }
    }

    /// Add `apikey`, and `cryptkey` when configured, to the request query.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.query(&[(API_KEY_PARAM, self.api_key.as_str())]);
        match &self.crypt_key {
            Some(crypt_key) => request.query(&[(CRYPT_KEY_PARAM, crypt_key.as_str())]),
            None => request,
        }
    }

    pub(crate) fn has_crypt_key(&self) -> bool {
        self.crypt_key.is_some()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("crypt_key", &self.crypt_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
