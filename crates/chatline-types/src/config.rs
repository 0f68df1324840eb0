//! Configuration types for chatline.
//!
//! `ChatConfig` represents the optional `config.toml` that controls where
//! inference requests go. All fields have defaults, so an empty or missing
//! file is valid.

use serde::{Deserialize, Serialize};

/// Default inference endpoint (Hugging Face hosted Mixtral).
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mixtral-8x7B-Instruct-v0.1";

/// Default bound on a single inference call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration, loaded from `~/.chatline/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub inference: InferenceConfig,
}

/// Settings for the remote inference call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Model endpoint URL the prompt is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip the network entirely and answer with the fallback responder.
    #[serde(default)]
    pub offline: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            offline: false,
        }
    }
}
