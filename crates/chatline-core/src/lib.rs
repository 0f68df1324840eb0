//! Conversation logic and provider trait definitions for chatline.
//!
//! This crate defines the `InferenceProvider` port that the infrastructure
//! layer implements, plus everything that decides what the assistant says:
//! the transcript, prompt windowing, the rule-based fallback and the session
//! state machine. It depends only on `chatline-types` -- never on
//! `chatline-infra` or any network crate.

pub mod chat;
pub mod llm;
