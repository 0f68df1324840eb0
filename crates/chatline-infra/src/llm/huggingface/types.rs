//! Hugging Face text-generation API types.
//!
//! These are endpoint-specific request/response structures. They are NOT the
//! generic types from chatline-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

use chatline_types::llm::GenerationParameters;

/// Request body: `{"inputs": ..., "parameters": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParameters,
}

/// One element of the response array.
///
/// A missing `generated_text` deserializes as empty so it is reported as an
/// empty response rather than a malformed one.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: String,
}
