//! Transcript turn types for chatline.
//!
//! A conversation is an ordered log of [`Turn`]s, each attributed to either
//! the user or the assistant. Turns render as `"<Speaker>: <text>"`, which is
//! both the prompt line format and the `history` line format.

use std::fmt;

use crate::llm::InferenceError;

/// Who said a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "User"),
            Speaker::Assistant => write!(f, "Assistant"),
        }
    }
}

/// One message in the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

/// Where an assistant answer came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplySource {
    /// The remote model produced usable text.
    Model,
    /// The rule-based responder answered because inference failed.
    Fallback { reason: InferenceError },
}

impl ReplySource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ReplySource::Fallback { .. })
    }
}

/// Result of one completed chat exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeOutcome {
    /// The assistant text shown to the user and stored in the transcript.
    pub answer: String,
    pub source: ReplySource,
}

/// Snapshot of the session counters for the `stats` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Completed chat exchanges (meta-commands excluded).
    pub total_messages: u32,
    /// Number of turns stored in the transcript.
    pub conversation_turns: usize,
}
