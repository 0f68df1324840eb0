//! InferenceProvider trait definition.
//!
//! This is the core abstraction that every inference backend implements.
//! Uses RPITIT for `generate`; `BoxInferenceProvider` adds an object-safe
//! wrapper for runtime selection.

use chatline_types::llm::InferenceError;

/// Trait for inference backends (hosted HTTP endpoint, offline, test doubles).
///
/// Implementations never retry: one call to `generate` is at most one
/// request. Any failure is returned as an [`InferenceError`] and the caller
/// decides how to recover.
pub trait InferenceProvider: Send + Sync {
    /// Human-readable provider name (e.g., "huggingface", "offline").
    fn name(&self) -> &str;

    /// Generate a continuation for `prompt`.
    ///
    /// On success the returned text is non-empty, already cut at the next
    /// user marker and trimmed.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, InferenceError>> + Send;
}
