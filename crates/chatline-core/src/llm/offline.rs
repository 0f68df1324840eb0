//! Provider used when the network is disabled.

use chatline_types::llm::InferenceError;

use super::provider::InferenceProvider;

/// Inference backend that is never reachable.
///
/// Selected with `--offline` or `inference.offline = true`; every exchange is
/// answered by the fallback responder.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

impl InferenceProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, InferenceError> {
        Err(InferenceError::Unavailable)
    }
}
