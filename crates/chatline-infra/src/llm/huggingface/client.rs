//! HuggingFaceProvider -- concrete [`InferenceProvider`] for hosted text generation.
//!
//! Sends one POST per call with a bounded timeout and never retries. The
//! generated text is cut at the next `User:` marker (the model sometimes
//! keeps writing the conversation) and trimmed; an empty result is a failure.

use std::time::Duration;

use tracing::debug;

use chatline_core::chat::prompt::USER_MARKER;
use chatline_core::llm::provider::InferenceProvider;
use chatline_types::config::InferenceConfig;
use chatline_types::llm::{GenerationParameters, InferenceError};

use super::types::{GeneratedText, GenerationRequest};

/// Hosted text-generation provider.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    endpoint: String,
    parameters: GenerationParameters,
}

impl HuggingFaceProvider {
    /// Create a provider for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            parameters: GenerationParameters::default(),
        })
    }

    /// Create a provider from the `[inference]` config section.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, InferenceError> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a transport error to an [`InferenceError`].
fn map_transport_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout
    } else {
        InferenceError::Connection(e.to_string())
    }
}

/// Cut generated text at the first user marker and trim it.
///
/// Returns `None` if nothing is left.
pub fn extract_reply(generated: &str) -> Option<String> {
    let reply = generated
        .split(USER_MARKER)
        .next()
        .unwrap_or_default()
        .trim();
    if reply.is_empty() {
        None
    } else {
        Some(reply.to_string())
    }
}

impl InferenceProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GenerationRequest {
            inputs: prompt,
            parameters: &self.parameters,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        let generations: Vec<GeneratedText> = serde_json::from_str(&text)
            .map_err(|e| InferenceError::Malformed(e.to_string()))?;

        let first = generations.first().ok_or(InferenceError::EmptyResponse)?;
        let reply = extract_reply(&first.generated_text).ok_or(InferenceError::EmptyResponse)?;

        debug!(reply_chars = reply.len(), "Inference succeeded");
        Ok(reply)
    }
}
