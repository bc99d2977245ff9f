//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Every server setting
//! can also come from the environment (or a `.env` file).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::chunking::{DEFAULT_MAX_LENGTH, DEFAULT_MAX_LINES};
use crate::core::DEFAULT_RESERVED_USERNAME;
use crate::upstream::{
    DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE,
};

/// CemBot relay: forwards chat queries to an LLM and pages the reply back in
/// chat-sized chunks.
#[derive(Parser, Debug)]
#[command(name = "cembot-relay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log output format.
    #[arg(long, env = "RELAY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Log output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP relay server.
    Serve(ServeArgs),

    /// Segment text the way the server would and print the chunks.
    ///
    /// Reads from FILE, or from stdin when no file is given.
    Split {
        /// Path to the text file.
        file: Option<PathBuf>,

        /// Chunk limits.
        #[command(flatten)]
        limits: LimitArgs,

        /// Apply overlap reconciliation as chunks would be delivered.
        #[arg(short, long)]
        reconcile: bool,

        /// Output format (text, json).
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Server settings.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Chat-completions endpoint URL.
    #[arg(long, env = "OPENROUTER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Upstream bearer credential. Queries fail with a configuration error
    /// when it is absent.
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier sent upstream.
    #[arg(long, env = "DEEPSEEK_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Public URL sent as the `HTTP-Referer` header.
    #[arg(long, env = "PUBLIC_URL", default_value = DEFAULT_REFERER)]
    pub referer: String,

    /// Service title sent as the `X-Title` header.
    #[arg(long, env = "SERVICE_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Chunk limits.
    #[command(flatten)]
    pub limits: LimitArgs,

    /// Username that selects the reserved persona (case-insensitive).
    #[arg(long, env = "RESERVED_USERNAME", default_value = DEFAULT_RESERVED_USERNAME)]
    pub reserved_username: String,

    /// Comma-separated banned terms. Without it only the built-in
    /// placeholder terms are blocked, so deployments should always set it.
    #[arg(long, env = "BANNED_WORDS", value_delimiter = ',')]
    pub banned_words: Vec<String>,
}

/// Chunk limit settings.
#[derive(Args, Debug, Clone, Copy)]
pub struct LimitArgs {
    /// Maximum chunk length in characters.
    #[arg(long, env = "CHUNK_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Maximum lines per chunk.
    #[arg(long, env = "CHUNK_MAX_LINES", default_value_t = DEFAULT_MAX_LINES)]
    pub max_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "cembot-relay",
            "serve",
            "--port",
            "8080",
            "--api-key",
            "sk-test",
            "--max-lines",
            "5",
            "--banned-words",
            "foo,bar",
        ])
        .unwrap();

        let Commands::Serve(args) = cli.command else {
            unreachable!("expected serve");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.api_key.as_deref(), Some("sk-test"));
        assert_eq!(args.limits.max_lines, 5);
        assert_eq!(args.banned_words, vec!["foo", "bar"]);
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from([
            "cembot-relay",
            "--log-format",
            "json",
            "split",
            "reply.txt",
            "--reconcile",
            "--max-length",
            "200",
        ])
        .unwrap();

        assert_eq!(cli.log_format, LogFormat::Json);
        let Commands::Split {
            file,
            limits,
            reconcile,
            format,
        } = cli.command
        else {
            unreachable!("expected split");
        };
        assert_eq!(file, Some(PathBuf::from("reply.txt")));
        assert_eq!(limits.max_length, 200);
        assert!(reconcile);
        assert_eq!(format, "text");
    }
}
