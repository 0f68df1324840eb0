//! Infrastructure layer for chatline.
//!
//! Contains the implementations of the ports defined in `chatline-core`:
//! the HTTP inference client and the TOML configuration loader.

pub mod config;
pub mod llm;
