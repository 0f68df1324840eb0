//! Prompt builder for inference requests.
//!
//! Renders the tail of the transcript plus the new user message as a single
//! completion-style prompt:
//!
//! ```text
//! User: earlier question
//! Assistant: earlier answer
//!
//! User: {message}
//! Assistant:
//! ```
//!
//! The trailing `Assistant: ` cue asks the model to continue as the
//! assistant. Message text is never truncated.

use super::transcript::Transcript;

/// Number of trailing transcript turns (three exchanges) sent as context.
pub const CONTEXT_WINDOW_TURNS: usize = 6;

/// Marker that opens a user line. Generated text is cut at this marker so the
/// model cannot speak for the user.
pub const USER_MARKER: &str = "User:";

/// Builds completion prompts from the transcript.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the prompt for `message` given the transcript so far.
    ///
    /// `transcript` must not yet contain `message`; it is rendered once, on
    /// the new-message line.
    pub fn build(transcript: &Transcript, message: &str) -> String {
        let context = transcript
            .window(CONTEXT_WINDOW_TURNS)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        if context.is_empty() {
            format!("{USER_MARKER} {message}\nAssistant: ")
        } else {
            format!("{context}\n\n{USER_MARKER} {message}\nAssistant: ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_transcript() {
        let prompt = PromptBuilder::build(&Transcript::new(), "hello");
        assert_eq!(prompt, "User: hello\nAssistant: ");
    }

    #[test]
    fn test_build_with_context() {
        let mut transcript = Transcript::new();
        transcript.push_exchange("hello", "Hi!");

        let prompt = PromptBuilder::build(&transcript, "how are you?");
        assert_eq!(
            prompt,
            "User: hello\nAssistant: Hi!\n\nUser: how are you?\nAssistant: "
        );
    }

    #[test]
    fn test_build_uses_last_six_turns_in_order() {
        let mut transcript = Transcript::new();
        for i in 0..4 {
            transcript.push_exchange(format!("question {i}"), format!("answer {i}"));
        }

        let prompt = PromptBuilder::build(&transcript, "next");

        assert!(!prompt.contains("question 0"));
        assert!(!prompt.contains("answer 0"));
        let expected_context = [
            "User: question 1",
            "Assistant: answer 1",
            "User: question 2",
            "Assistant: answer 2",
            "User: question 3",
            "Assistant: answer 3",
        ]
        .join("\n");
        assert!(prompt.starts_with(&expected_context));
        assert!(prompt.ends_with("\n\nUser: next\nAssistant: "));
    }

    #[test]
    fn test_build_passes_long_input_verbatim() {
        let long = "x".repeat(10_000);
        let prompt = PromptBuilder::build(&Transcript::new(), &long);
        assert!(prompt.contains(&long));
        assert_eq!(prompt.len(), long.len() + "User: \nAssistant: ".len());
    }

    #[test]
    fn test_build_keeps_multiline_turn_content() {
        let mut transcript = Transcript::new();
        transcript.push_exchange("write code", "def f():\n    return 1");

        let prompt = PromptBuilder::build(&transcript, "thanks");
        assert!(prompt.contains("Assistant: def f():\n    return 1\n\n"));
    }
}
