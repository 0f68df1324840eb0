//! Session manager for the interactive chat loop.
//!
//! Owns the transcript, the exchange counter and the `Running` /
//! `Terminated` lifecycle state. Mutated only by the loop that owns it.

use chatline_types::chat::SessionStats;

use super::transcript::Transcript;

/// Lifecycle state of a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    Terminated,
}

/// Manages the state of a single chat session.
#[derive(Debug, Default)]
pub struct SessionManager {
    transcript: Transcript,
    /// Completed chat exchanges (one user + one assistant turn each).
    exchange_count: u32,
    state: SessionState,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn exchange_count(&self) -> u32 {
        self.exchange_count
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Record a completed exchange: appends two turns and bumps the counter.
    pub fn record_exchange(&mut self, user: &str, assistant: &str) {
        self.transcript.push_exchange(user, assistant);
        self.exchange_count += 1;
    }

    /// Move to `Terminated`. Idempotent.
    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_messages: self.exchange_count,
            conversation_turns: self.transcript.len(),
        }
    }
}
