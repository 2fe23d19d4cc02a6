//! Generative-AI text completion.
//!
//! The model is treated as an opaque prompt-in/text-out dependency behind
//! the [`TextCompletion`] trait so handlers and tests depend on the
//! contract, not on Gemini.
//!
//! # Public API
//!
//! - [`TextCompletion`] — the completion contract
//! - [`GeminiClient`] — reqwest-based Gemini implementation
//! - [`prompts`] — the prompt builders used by the API layer

pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;

/// Errors from the text-completion service.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// The request never reached the service (DNS, connect, TLS...).
    #[error("Gemini request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status or an unreadable body.
    #[error("Gemini generateContent failed: {0}")]
    Provider(String),

    /// The service answered successfully but returned no candidate text.
    #[error("Gemini returned no candidate text")]
    EmptyResponse,
}

/// Prompt-in, text-out completion contract.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send `prompt` to the model and return its raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, GenAiError>;
}
