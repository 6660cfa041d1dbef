use serde_json::Value;
use thiserror::Error;

/// Failures of the summarization adapter. Every variant renders as a single
/// human-readable line that includes the root cause.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Failed to generate summary: Gemini API key or URL not configured ({0})")]
    Config(String),

    #[error("Failed to generate summary: request to Gemini API failed: {0}")]
    Transport(String),

    #[error(
        "Failed to generate summary: Gemini API error: {status} {status_text}. Details: {body}"
    )]
    Provider {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Failed to generate summary: invalid response format from Gemini API: {reason}")]
    Format { reason: String, payload: Value },
}

impl SummarizeError {
    /// Raw decoded payload attached to a `Format` failure, for diagnostics.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        match self {
            SummarizeError::Format { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Renders an error and every `source()` below it, joined with `": "`.
///
/// `reqwest::Error`'s own `Display` stops at the top level ("error sending
/// request for url ..."), so the OS or TLS cause only shows up in the chain.
#[must_use]
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Transport(error_chain(&error))
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to reach summary store: {0}")]
    Http(String),

    #[error("Summary store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode summary store response: {0}")]
    Decode(String),

    #[error("Summary store failure: {0}")]
    Backend(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            StoreError::Decode(error_chain(&error))
        } else {
            StoreError::Http(error_chain(&error))
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Decode(error.to_string())
    }
}

/// Errors surfaced by the note workflow to whatever front end drives it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter some text to summarize")]
    EmptyNote,

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
