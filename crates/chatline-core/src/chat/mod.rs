//! Conversation state and the chat exchange pipeline.
//!
//! `SessionManager` owns the transcript and counters; `ChatService` turns a
//! classified input line into a `LineOutcome`, running the prompt builder,
//! the inference provider and the fallback responder for chat messages.

pub mod commands;
pub mod prompt;
pub mod service;
pub mod session;
pub mod transcript;
