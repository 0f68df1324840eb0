//! CLI argument definitions for the `chatline` binary.
//!
//! Running with no arguments starts the interactive chat; every flag is an
//! optional ambient setting.

pub mod chat;

use std::path::PathBuf;

use clap::Parser;

/// Chat with a hosted language model, with offline canned answers as backup.
#[derive(Parser)]
#[command(name = "chatline", version, about, long_about = None)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed log output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file location (default: ~/.chatline/config.toml).
    #[arg(long, env = "CHATLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Never call the inference endpoint; answer with canned responses.
    #[arg(long)]
    pub offline: bool,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long)]
    pub otel: bool,
}
