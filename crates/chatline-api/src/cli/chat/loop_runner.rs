//! Main chat loop orchestration.
//!
//! Reads one line at a time, classifies it, applies it to the session
//! through `ChatService`, and prints the result. Lines are processed strictly
//! in order; the next prompt appears only after the previous line is done.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::debug;

use chatline_core::chat::commands::{self, LineAction};
use chatline_core::chat::service::{ChatService, LineOutcome};
use chatline_core::chat::session::SessionManager;
use chatline_types::chat::SessionStats;

use super::banner::render_welcome_banner;
use super::input::{ChatInput, InputEvent, LineSource};
use super::renderer;

/// Prompt shown before each input line.
pub const PROMPT: &str = "YOUR QUESTION: ";

/// Run the interactive chat loop until the user quits.
///
/// Returns the final session statistics.
pub async fn run_chat_loop(service: &ChatService) -> anyhow::Result<SessionStats> {
    let mut input = ChatInput::new(PROMPT)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    print!("{}", render_welcome_banner(service.provider_name()));

    Ok(drive_session(service, &mut input, &mut std::io::stdout()).await)
}

/// Feed lines from `input` through a fresh session until it terminates.
///
/// End of input and Ctrl+C end the session like a quit word. A line that
/// fails is reported on stderr and the loop moves on to the next one.
async fn drive_session<I: LineSource, W: Write>(
    service: &ChatService,
    input: &mut I,
    out: &mut W,
) -> SessionStats {
    let mut session = SessionManager::new();

    while session.is_running() {
        let action = match input.read_line().await {
            InputEvent::Message(text) => commands::classify(&text),
            InputEvent::Eof | InputEvent::Interrupted => LineAction::Quit,
        };

        if let Err(e) = process_line(service, &mut session, action, out).await {
            eprint!("{}", renderer::render_error(&e));
        }
    }

    session.stats()
}

/// Handle one classified line and write its output to `out`.
async fn process_line<W: Write>(
    service: &ChatService,
    session: &mut SessionManager,
    action: LineAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let spinner = match &action {
        LineAction::Chat(text) => {
            write!(out, "{}", renderer::render_user_echo(text))?;
            out.flush()?;
            Some(thinking_spinner()?)
        }
        _ => None,
    };

    let start_time = Instant::now();
    let outcome = service.handle(session, action).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome {
        LineOutcome::Terminated(stats) => {
            write!(out, "{}", renderer::render_stats(&stats))?;
            write!(out, "{}", renderer::render_session_end())?;
        }
        LineOutcome::Stats(stats) => {
            write!(out, "{}", renderer::render_stats(&stats))?;
        }
        LineOutcome::History(turns) => {
            write!(out, "{}", renderer::render_history(&turns))?;
        }
        LineOutcome::EmptyInput => {
            write!(out, "{}", renderer::render_empty_input())?;
        }
        LineOutcome::Reply(reply) => {
            debug!(
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                fallback = reply.source.is_fallback(),
                "Exchange complete"
            );
            write!(out, "{}", renderer::render_answer(&reply.answer))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Spinner shown on stderr while waiting for the inference call.
fn thinking_spinner() -> anyhow::Result<indicatif::ProgressBar> {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(indicatif::ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("AI is thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}
