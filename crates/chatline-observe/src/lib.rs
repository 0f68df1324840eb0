//! Logging and trace export setup for chatline.

pub mod tracing_setup;
