//! Append-only conversation log.
//!
//! The transcript keeps every turn for the lifetime of the session. Readers
//! that need a bounded view (the prompt builder) take a window from the end
//! instead of the log being trimmed.

use chatline_types::chat::Turn;

/// Ordered log of user and assistant turns.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one complete exchange: the user turn, then the assistant turn.
    pub fn push_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.turns.push(Turn::user(user));
        self.turns.push(Turn::assistant(assistant));
    }

    /// All turns in insertion order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The last `n` turns (or all of them if there are fewer than `n`).
    pub fn window(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
