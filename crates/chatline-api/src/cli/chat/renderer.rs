//! Console rendering for the chat loop.
//!
//! Every block is built as a `String` so the loop can write it in one call
//! and tests can check it. Blocks are framed with 70-character rules of `=`
//! (session-level output) or `-` (the assistant answer).

use console::style;

use chatline_types::chat::{SessionStats, Turn};

/// Width of the `=` and `-` rule lines.
pub const RULE_WIDTH: usize = 70;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Echo of the user's message before the answer is fetched.
pub fn render_user_echo(message: &str) -> String {
    let heavy = rule('=');
    format!("\n{heavy}\n{} {message}\n{heavy}\n", style("YOU:").green().bold())
}

/// The assistant's answer, followed by a blank line.
pub fn render_answer(answer: &str) -> String {
    let light = rule('-');
    format!(
        "\n{}\n{light}\n{answer}\n{light}\n\n",
        style("AI ASSISTANT:").cyan().bold()
    )
}

/// Output of the `stats` command (and of session end).
pub fn render_stats(stats: &SessionStats) -> String {
    let heavy = rule('=');
    format!(
        "\n{heavy}\n{}\n{heavy}\nTotal messages: {}\nConversation turns: {}\n{heavy}\n\n",
        style("STATISTICS").bold(),
        stats.total_messages,
        stats.conversation_turns,
    )
}

/// Output of the `history` command: numbered turns, or a notice when empty.
pub fn render_history(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return "No conversation yet.\n".to_string();
    }

    let heavy = rule('=');
    let mut output = format!("\n{heavy}\n{}\n{heavy}\n\n", style("HISTORY").bold());
    for (i, turn) in turns.iter().enumerate() {
        output.push_str(&format!("{}. {turn}\n\n", i + 1));
    }
    output.push_str(&heavy);
    output.push_str("\n\n");
    output
}

/// Shown when the user submits a blank line.
pub fn render_empty_input() -> String {
    format!("{}\n\n", style("Please enter a question").dim())
}

/// Shown once the session has ended.
pub fn render_session_end() -> String {
    format!("{}\n", style("Session ended").dim())
}

/// One-line report for an error raised while handling a line.
pub fn render_error(err: &anyhow::Error) -> String {
    format!("{} {err}\n\n", style("Error:").red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).into_owned()
    }

    #[test]
    fn test_stats_with_zero_messages() {
        let out = plain(render_stats(&SessionStats::default()));
        assert!(out.contains("STATISTICS"));
        assert!(out.contains("Total messages: 0\n"));
        assert!(out.contains("Conversation turns: 0\n"));
        assert_eq!(out.matches(&"=".repeat(RULE_WIDTH)).count(), 3);
    }

    #[test]
    fn test_stats_counts() {
        let out = plain(render_stats(&SessionStats {
            total_messages: 2,
            conversation_turns: 4,
        }));
        assert!(out.contains("Total messages: 2"));
        assert!(out.contains("Conversation turns: 4"));
    }

    #[test]
    fn test_history_empty() {
        assert_eq!(render_history(&[]), "No conversation yet.\n");
    }

    #[test]
    fn test_history_numbered() {
        let turns = vec![Turn::user("hello"), Turn::assistant("Hi!")];
        let out = plain(render_history(&turns));
        assert!(out.contains("HISTORY"));
        assert!(out.contains("1. User: hello\n\n2. Assistant: Hi!\n\n"));
    }

    #[test]
    fn test_user_echo() {
        let out = plain(render_user_echo("what is rust?"));
        assert!(out.contains("YOU: what is rust?"));
        assert_eq!(out.matches(&"=".repeat(RULE_WIDTH)).count(), 2);
    }

    #[test]
    fn test_answer_framed_by_dashes() {
        let out = plain(render_answer("line one\nline two"));
        let dashes = "-".repeat(RULE_WIDTH);
        assert!(out.contains("AI ASSISTANT:"));
        assert!(out.contains(&format!("{dashes}\nline one\nline two\n{dashes}")));
    }

    #[test]
    fn test_error_line() {
        let err = anyhow::anyhow!("stdout closed");
        assert_eq!(plain(render_error(&err)), "Error: stdout closed\n\n");
    }

    #[test]
    fn test_notices() {
        assert_eq!(plain(render_empty_input()), "Please enter a question\n\n");
        assert_eq!(plain(render_session_end()), "Session ended\n");
    }
}
