//! The external text-generation capability boundary.
//!
//! The resolver core depends only on [`TextGenerator`]; one adapter per
//! vendor lives beside it. Adapters own authentication, wire shapes, and
//! timeouts, and return either the raw textual payload or a
//! [`GeneratorError`] — never a parsed reading.

pub mod gemini;
pub mod openrouter;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use openrouter::{OpenRouterClient, OpenRouterConfig};

/// Failure of one completion attempt. Every variant is absorbed by the
/// resolver's fallback path; none of them reach the resolver's caller.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Network failure, timeout, or an unusable response envelope.
    #[error("transport error: {0}")]
    Transport(String),

    /// Vendor answered with a non-success HTTP status.
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Vendor answered 2xx but produced no textual candidate.
    #[error("empty completion payload")]
    EmptyPayload,
}

/// One-shot text completion against an external vendor.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a single completion attempt and return the raw textual payload.
    /// Exactly one request per call — retry policy belongs to the caller.
    async fn complete(
        &self,
        system_context: &str,
        user_text: &str,
    ) -> Result<String, GeneratorError>;

    /// Vendor name for logging.
    fn provider_name(&self) -> &str;
}
