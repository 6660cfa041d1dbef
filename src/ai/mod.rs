//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod transport;

// Re-export main types for convenience
pub use client::{GeminiClient, Summarizer};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
