//! chatline CLI entry point.
//!
//! Binary name: `chatline`
//!
//! Parses CLI arguments, sets up logging, loads configuration, picks the
//! inference backend, then runs the interactive chat loop.

mod cli;

use clap::Parser;
use tracing::info;

use chatline_core::chat::service::ChatService;
use chatline_infra::config::load_config;
use chatline_infra::llm::create_provider;
use chatline_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let mut config = load_config(cli.config.as_deref()).await;
    if cli.offline {
        config.inference.offline = true;
    }

    let provider = create_provider(&config.inference)?;
    info!(
        provider = provider.name(),
        endpoint = %config.inference.endpoint,
        timeout_secs = config.inference.timeout_secs,
        "Inference backend ready"
    );

    let service = ChatService::new(provider);
    let result = cli::chat::loop_runner::run_chat_loop(&service).await;

    if let Ok(stats) = &result {
        info!(
            total_messages = stats.total_messages,
            conversation_turns = stats.conversation_turns,
            "Session finished"
        );
    }

    shutdown_tracing();
    result.map(|_| ())
}
