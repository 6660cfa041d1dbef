//! HTTP transport used by the summarization client.
//!
//! The client hands a fully built request to a [`Transport`]; the production
//! implementation wraps `reqwest`. Tests swap in their own implementation.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::errors::SummarizeError;

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one JSON POST and reads the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Transport`] when the exchange cannot complete.
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &Value,
    ) -> Result<HttpResponse, SummarizeError>;
}

/// `reqwest` backed transport. No timeout is configured here; the client's
/// defaults apply.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &Value,
    ) -> Result<HttpResponse, SummarizeError> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
