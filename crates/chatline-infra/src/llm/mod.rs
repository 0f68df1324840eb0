//! Inference provider implementations.
//!
//! Contains the concrete HTTP implementation of the [`InferenceProvider`]
//! trait defined in `chatline-core`, plus a factory ([`create_provider`])
//! that picks the right backend from an [`InferenceConfig`].
//!
//! [`InferenceProvider`]: chatline_core::llm::provider::InferenceProvider

pub mod huggingface;

use chatline_core::llm::box_provider::BoxInferenceProvider;
use chatline_core::llm::offline::OfflineProvider;
use chatline_types::config::InferenceConfig;
use chatline_types::llm::InferenceError;

use self::huggingface::HuggingFaceProvider;

/// Create a [`BoxInferenceProvider`] from the `[inference]` config section.
///
/// # Errors
///
/// Returns [`InferenceError::Client`] if the HTTP client cannot be built.
pub fn create_provider(config: &InferenceConfig) -> Result<BoxInferenceProvider, InferenceError> {
    if config.offline {
        return Ok(BoxInferenceProvider::new(OfflineProvider));
    }
    let provider = HuggingFaceProvider::from_config(config)?;
    Ok(BoxInferenceProvider::new(provider))
}
