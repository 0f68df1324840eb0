//! Input line classification.
//!
//! Meta-commands are bare words matched case-insensitively against the whole
//! trimmed line; anything else non-empty is a chat message.

/// What a single input line asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// `quit`, `exit`, `bye` or `stop`: print statistics and end the session.
    Quit,
    /// Print the session counters.
    Stats,
    /// Print the full transcript.
    History,
    /// Blank line.
    Empty,
    /// Send the (trimmed) text through the chat pipeline.
    Chat(String),
}

/// Words that end the session.
pub const QUIT_WORDS: [&str; 4] = ["quit", "exit", "bye", "stop"];

/// Classify a raw input line.
pub fn classify(line: &str) -> LineAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineAction::Empty;
    }

    let lowered = trimmed.to_lowercase();
    if QUIT_WORDS.contains(&lowered.as_str()) {
        return LineAction::Quit;
    }

    match lowered.as_str() {
        "stats" => LineAction::Stats,
        "history" => LineAction::History,
        _ => LineAction::Chat(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quit_words() {
        for word in ["quit", "exit", "bye", "stop", "QUIT", "  Bye  "] {
            assert_eq!(classify(word), LineAction::Quit, "{word}");
        }
    }

    #[test]
    fn test_classify_stats_and_history() {
        assert_eq!(classify("stats"), LineAction::Stats);
        assert_eq!(classify("Stats"), LineAction::Stats);
        assert_eq!(classify("history"), LineAction::History);
        assert_eq!(classify(" HISTORY "), LineAction::History);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(""), LineAction::Empty);
        assert_eq!(classify("   \t "), LineAction::Empty);
    }

    #[test]
    fn test_classify_chat_is_trimmed() {
        assert_eq!(
            classify("  hello world  "),
            LineAction::Chat("hello world".to_string())
        );
    }

    #[test]
    fn test_command_words_inside_sentence_are_chat() {
        assert_eq!(
            classify("please stop"),
            LineAction::Chat("please stop".to_string())
        );
        assert_eq!(
            classify("show history"),
            LineAction::Chat("show history".to_string())
        );
    }
}
