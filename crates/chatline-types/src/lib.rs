//! Shared domain types for chatline.
//!
//! This crate contains the core domain types used across the chatline
//! workspace: transcript turns, inference request parameters, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
