//! Gemini API client module
//!
//! Turns note text into a `generateContent` request, sends it through a
//! [`Transport`], and decodes the generated summary.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

use super::prompt_builder::build_prompt;
use super::transport::{ReqwestTransport, Transport};
use crate::core::config::GeminiConfig;
use crate::core::models::SummaryResult;
use crate::errors::SummarizeError;

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

// Sampling policy sent with every request. Not user-configurable.
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_K: u32 = 40;
pub const TOP_P: f64 = 0.95;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Anything that can turn note text into a summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`SummarizeError`] describing why no summary was produced.
    async fn summarize(&self, note_text: &str) -> Result<SummaryResult, SummarizeError>;
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Holds no per-call state: every [`Summarizer::summarize`] call validates the
/// configuration, makes exactly one request and never retries.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    transport: Arc<dyn Transport>,
}

impl GeminiClient {
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::default()))
    }

    #[must_use]
    pub fn with_transport(config: GeminiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    fn build_headers(api_key: &str) -> Result<HeaderMap, SummarizeError> {
        let mut key_value = HeaderValue::from_str(api_key).map_err(|e| {
            SummarizeError::Config(format!("API key is not a valid header value: {e}"))
        })?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);
        Ok(headers)
    }
}

/// Request body for a single-turn `generateContent` call.
#[must_use]
pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "topK": TOP_K,
            "topP": TOP_P,
            "maxOutputTokens": MAX_OUTPUT_TOKENS
        }
    })
}

/// Pulls `candidates[0].content.parts[0].text` out of a success payload and
/// trims it.
///
/// # Errors
///
/// Returns [`SummarizeError::Format`] carrying the payload when the path is
/// absent or the text is blank.
pub fn extract_summary(payload: Value) -> Result<SummaryResult, SummarizeError> {
    let decoded = match GenerateContentResponse::deserialize(&payload) {
        Ok(decoded) => decoded,
        Err(e) => return Err(format_error(format!("unexpected shape: {e}"), payload)),
    };

    let text = decoded
        .candidates
        .into_iter()
        .next()
        .ok_or("missing candidates[0]")
        .and_then(|c| c.content.ok_or("missing candidates[0].content"))
        .and_then(|c| {
            c.parts
                .into_iter()
                .next()
                .ok_or("missing candidates[0].content.parts[0]")
        })
        .and_then(|p| p.text.ok_or("missing candidates[0].content.parts[0].text"));

    let text = match text {
        Ok(text) => text,
        Err(reason) => return Err(format_error(reason.to_string(), payload)),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(format_error("generated text is empty".to_string(), payload));
    }

    Ok(SummaryResult {
        text: trimmed.to_string(),
    })
}

fn format_error(reason: String, payload: Value) -> SummarizeError {
    error!(%payload, "Unexpected response format from Gemini API: {}", reason);
    SummarizeError::Format { reason, payload }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, note_text: &str) -> Result<SummaryResult, SummarizeError> {
        let (api_url, api_key) = self.config.require().map_err(SummarizeError::Config)?;
        let headers = Self::build_headers(api_key)?;

        let prompt = build_prompt(note_text);

        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary for note of {} chars (prompt {} chars)",
            note_text.chars().count(),
            prompt.chars().count()
        );

        let body = build_request_body(&prompt);
        let response = self.transport.post_json(api_url, headers, &body).await?;

        info!("Gemini API responded with status {}", response.status);

        if !response.is_success() {
            error!(
                status = response.status,
                "Gemini API error response: {}", response.body
            );
            return Err(SummarizeError::Provider {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        let payload: Value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            Err(e) => {
                return Err(format_error(
                    format!("response body is not valid JSON: {e}"),
                    Value::String(response.body),
                ));
            }
        };

        extract_summary(payload)
    }
}
