//! HTTP dispatch shared by the facade and every resource client.

use crate::auth::Credentials;
use crate::error::{D4SignError, Result};
use crate::types::Envelope;
use reqwest::multipart::Form;
use reqwest::{header, Client as HttpClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Authenticated HTTP transport bound to one base URL.
///
/// Immutable after construction and shared behind an `Arc`.
#[derive(Debug)]
pub(crate) struct Transport {
    http: HttpClient,
    base_url: String,
    credentials: Credentials,
}

impl Transport {
    pub(crate) fn new(
        base_url: String,
        timeout: Duration,
        user_agent: String,
        credentials: Credentials,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        // Request-level content types (multipart) take precedence.
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(D4SignError::from_transport)?;

        debug!(
            base_url = %base_url,
            crypt_key = credentials.has_crypt_key(),
            "d4sign transport ready"
        );

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated request. Every call goes through here.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.credentials.apply(self.http.request(method, url))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.send(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path).query(query);
        self.send(Method::GET, path, request).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, request).await
    }

    /// POST without a body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.send(Method::POST, path, self.request(Method::POST, path))
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<Envelope<T>> {
        let request = self.request(Method::POST, path).multipart(form);
        self.send(Method::POST, path, request).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, request).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.send(Method::DELETE, path, self.request(Method::DELETE, path))
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Envelope<T>> {
        debug!(%method, path, "d4sign request");

        let response = request.send().await.map_err(D4SignError::from_transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(D4SignError::from_transport)?;

        debug!(%method, path, status = status.as_u16(), "d4sign response");

        if !status.is_success() {
            return Err(D4SignError::from_response(status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|e| D4SignError::decode(status.as_u16(), &body, e))
    }
}
