//! CompletionProvider trait definition.
//!
//! The single abstraction over the hosted completion API. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition). Implementations live
//! in `murmur-infra` (e.g., `OpenAiCompatibleProvider`).

use murmur_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion backends.
///
/// One attempt per request: callers surface any failure as a degraded
/// text response rather than retrying.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
