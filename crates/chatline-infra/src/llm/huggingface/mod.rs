//! Hugging Face style text-generation inference provider.
//!
//! POSTs `{inputs, parameters}` to a model endpoint and reads back a JSON
//! array of `{generated_text}` objects.

pub mod client;
pub mod types;

pub use client::HuggingFaceProvider;
