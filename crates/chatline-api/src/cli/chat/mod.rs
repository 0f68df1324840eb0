//! Interactive CLI chat experience for chatline.
//!
//! This module implements the read-dispatch-print loop: line input with
//! interrupt handling, the framed console output and the thinking spinner.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod input;
pub mod loop_runner;
pub mod renderer;
