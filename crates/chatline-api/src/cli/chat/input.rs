//! Async line input for the chat loop.
//!
//! On a terminal this wraps `rustyline_async::Readline` for line editing and
//! Ctrl+C / Ctrl+D detection. When stdin is a pipe or file, lines are read
//! with a buffered reader and Ctrl+C is taken from the process signal.

use std::future::Future;
use std::io::{self, IsTerminal, Write};

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

/// Events produced by the input handler.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// User submitted a line (trimmed).
    Message(String),
    /// End of input (Ctrl+D or closed stdin).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Anything the chat loop can pull input events from.
pub trait LineSource {
    async fn read_line(&mut self) -> InputEvent;
}

enum Source {
    Terminal {
        rl: Readline,
        _writer: SharedWriter,
    },
    Piped {
        lines: Lines<BufReader<Stdin>>,
        prompt: String,
    },
}

/// Line reader for the chat prompt.
pub struct ChatInput {
    source: Source,
}

impl ChatInput {
    /// Create an input handler that shows `prompt` before each line.
    pub fn new(prompt: &str) -> Result<Self, ReadlineError> {
        let source = if std::io::stdin().is_terminal() {
            let (rl, writer) = Readline::new(prompt.to_string())?;
            Source::Terminal {
                rl,
                _writer: writer,
            }
        } else {
            Source::Piped {
                lines: BufReader::new(tokio::io::stdin()).lines(),
                prompt: prompt.to_string(),
            }
        };
        Ok(Self { source })
    }
}

impl LineSource for ChatInput {
    async fn read_line(&mut self) -> InputEvent {
        match &mut self.source {
            Source::Terminal { rl, .. } => match rl.readline().await {
                Ok(ReadlineEvent::Line(line)) => InputEvent::Message(line.trim().to_string()),
                Ok(ReadlineEvent::Eof) => InputEvent::Eof,
                Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
                Err(_) => InputEvent::Eof,
            },
            Source::Piped { lines, prompt } => {
                if let Err(err) = show_prompt(&mut io::stdout(), prompt) {
                    debug!("stdout closed, ending input: {err}");
                    return InputEvent::Eof;
                }

                tokio::select! {
                    line = lines.next_line() => match line {
                        Ok(Some(line)) => InputEvent::Message(line.trim().to_string()),
                        Ok(None) | Err(_) => InputEvent::Eof,
                    },
                    () = interrupted(tokio::signal::ctrl_c()) => InputEvent::Interrupted,
                }
            }
        }
    }
}

fn show_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

/// Resolves once `signal` reports Ctrl+C.
///
/// If the handler could not be installed this never resolves, so input keeps
/// coming from stdin.
async fn interrupted(signal: impl Future<Output = io::Result<()>>) {
    if let Err(err) = signal.await {
        warn!("Ctrl+C handler unavailable: {err}");
        std::future::pending::<()>().await;
    }
}
