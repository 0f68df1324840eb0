//! Startup banner for chat sessions.

use console::style;

/// Build the banner printed when the chat loop starts.
///
/// Names the inference backend and lists the meta-commands.
pub fn render_welcome_banner(provider_name: &str) -> String {
    format!(
        "{}\n  {}  {}\n  {}\n\n",
        style("Chatbot Ready").cyan().bold(),
        style("Backend:").bold(),
        style(provider_name).dim(),
        style("Commands: quit, stats, history (Ctrl+C or Ctrl+D to exit)").dim(),
    )
}
