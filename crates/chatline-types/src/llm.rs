//! Inference request types for chatline.
//!
//! These types model the generation settings sent with every prompt and the
//! ways an inference call can fail. The wire format itself lives with the
//! HTTP client in `chatline-infra`.

use serde::{Deserialize, Serialize};

/// Sampling settings sent with every inference request.
///
/// These are fixed for the lifetime of the process; `Default` carries the
/// only values the client ever sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
    /// When false the endpoint returns only newly generated text, not the
    /// echoed prompt.
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Errors from an inference call.
///
/// Every variant is recovered the same way (the fallback responder answers);
/// the distinction exists for logging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response contained no generated text")]
    EmptyResponse,

    #[error("inference is unavailable")]
    Unavailable,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_parameters_defaults() {
        let params = GenerationParameters::default();
        assert_eq!(params.max_new_tokens, 512);
        assert!((params.temperature - 0.7).abs() < f64::EPSILON);
        assert!((params.top_p - 0.9).abs() < f64::EPSILON);
        assert!(params.do_sample);
        assert!(!params.return_full_text);
    }

    #[test]
    fn test_generation_parameters_field_names() {
        let value = serde_json::to_value(GenerationParameters::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "max_new_tokens",
            "temperature",
            "top_p",
            "do_sample",
            "return_full_text",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 5);
    }

    #[test]
    fn test_inference_error_display() {
        let err = InferenceError::Status {
            status: 503,
            body: "model loading".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: model loading");
        assert_eq!(InferenceError::Timeout.to_string(), "request timed out");
    }
}
