//! CLI layer.
//!
//! Provides the command-line interface using clap: `serve` runs the relay,
//! `split` runs the segmenter over a file for inspection.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{delivery_order, execute};
pub use output::OutputFormat;
pub use parser::{Cli, Commands, LogFormat, ServeArgs};
