//! notesum - summarize free-form notes with a generative-text API and keep
//! the results per user.
//!
//! # Architecture
//!
//! - [`ai`]: the Gemini `generateContent` adapter behind the [`ai::Summarizer`] trait
//! - [`store`]: the record store gateway ([`store::RecordStore`]) with REST and
//!   in-memory implementations
//! - [`features`]: the summarize / list / delete workflows
//! - `cli`: the `notes` command-line front end
//!
//! # Example
//!
//! ```no_run
//! use notesum::ai::GeminiClient;
//! use notesum::core::config::AppConfig;
//! use notesum::features::{Persistence, summarize_note};
//! use notesum::store::{MemoryStore, resolve_session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     notesum::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let summarizer = GeminiClient::new(config.gemini);
//!     let store = MemoryStore::anonymous();
//!     let session = resolve_session(&store).await;
//!
//!     let outcome = summarize_note(&summarizer, &store, &session, "Long meeting notes...").await?;
//!     println!("Summary: {}", outcome.summary.text);
//!     if let Persistence::Failed(e) = outcome.persistence {
//!         eprintln!("not saved: {e}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod ai;
#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod errors;
pub mod features;
pub mod store;
#[cfg(test)]
mod test_support;
pub mod utils;
pub mod views;

pub use errors::{AppError, StoreError, SummarizeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log collectors.
    Json,
    /// Human-readable single-line events.
    Compact,
}

/// Configure structured logging with JSON format.
///
/// Logs go to stderr and are filtered by `RUST_LOG` (default `info`).
/// Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// notesum::setup_logging();
/// ```
pub fn setup_logging() {
    setup_logging_with(LogFormat::Json);
}

/// Configure logging in the given format. Without `RUST_LOG`, compact output
/// only shows warnings so it does not interleave with command output.
pub fn setup_logging_with(format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_directive = match format {
        LogFormat::Json => "info",
        LogFormat::Compact => "warn",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };
}
