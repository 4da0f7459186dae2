//! HTTP transport.
//!
//! [`Transport`] is the seam between the facade and the network. The
//! default [`HttpTransport`] sends requests with `reqwest`; tests and
//! callers with their own stack can plug in anything that returns a status
//! and a body.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use vtpass_core::AuthHeaders;

use crate::error::ClientError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is exactly 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Issues authenticated requests relative to a base URL.
///
/// `path` is relative to the base URL and may carry a query string.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request.
    async fn get(&self, path: &str, headers: &AuthHeaders) -> Result<RawResponse, ClientError>;

    /// Send a POST request with a JSON body.
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: &AuthHeaders,
    ) -> Result<RawResponse, ClientError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with default settings).
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self::with_client(client, base_url)
    }

    /// Create a transport around an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<RawResponse, ClientError> {
        let response = request.send().await.map_err(ClientError::from_transport)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(ClientError::from_transport)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn with_headers(
    mut request: reqwest::RequestBuilder,
    headers: &AuthHeaders,
) -> reqwest::RequestBuilder {
    for (name, value) in headers.iter() {
        request = request.header(name, value);
    }
    request
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, headers: &AuthHeaders) -> Result<RawResponse, ClientError> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "Sending VTpass request");

        self.send(with_headers(self.client.get(&url), headers)).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
        headers: &AuthHeaders,
    ) -> Result<RawResponse, ClientError> {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "Sending VTpass request");

        self.send(with_headers(self.client.post(&url), headers).json(body))
            .await
    }
}
