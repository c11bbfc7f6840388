//! HTTP transport used by the user client.
//!
//! The trait is the seam for substituting the network in tests; the reqwest
//! implementation owns timeouts and status/body extraction.

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use tracing::debug;

use common::{AppError, AppResult, HttpClientConfig, TransportError};
use domain::CONTENT_TYPE_JSON;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Raw HTTP response as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status code
    pub status: u16,
    /// Reason phrase sent by the server, or the canonical one
    pub status_text: String,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response with the canonical reason phrase for the status code
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text_for(status),
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport client trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Issue a POST request with a JSON body
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured connect and request timeouts.
    pub fn new(config: &HttpClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    async fn read(response: Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        // hyper only records the phrase when it differs from the canonical one
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let body = response.bytes().await?;

        let mut read = HttpResponse::new(status, body.to_vec());
        if let Some(reason) = reason {
            read.status_text = reason;
        }
        Ok(read)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;
        Self::read(response).await
    }
}

/// Canonical reason phrase, or the numeric code when there is none.
fn status_text_for(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}
