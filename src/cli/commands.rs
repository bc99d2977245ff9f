//! CLI command implementations.

use std::io::{self, Read};
use std::path::Path;

use crate::chunking::{ChunkLimits, split_response};
use crate::cli::output::{OutputFormat, format_chunks};
use crate::cli::parser::{Cli, Commands, LimitArgs, ServeArgs};
use crate::config::Config;
use crate::core::Chunk;
use crate::error::Result;
use crate::pagination::PaginationStore;
use crate::server;

/// Executes the CLI command.
///
/// Returns the text to print; the server command prints nothing and only
/// returns once the server has shut down.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub async fn execute(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Serve(args) => cmd_serve(args).await,
        Commands::Split {
            file,
            limits,
            reconcile,
            format,
        } => cmd_split(
            file.as_deref(),
            limits,
            reconcile,
            OutputFormat::parse(&format),
        ),
    }
}

async fn cmd_serve(args: ServeArgs) -> Result<String> {
    let config = Config::try_from(args)?;
    server::run(config).await?;
    Ok(String::new())
}

fn cmd_split(
    file: Option<&Path>,
    limits: LimitArgs,
    reconcile: bool,
    format: OutputFormat,
) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let limits = ChunkLimits::checked(limits.max_length, limits.max_lines)?;
    let chunks = split_response(&text, limits);
    let chunks = if reconcile {
        delivery_order(chunks)
    } else {
        chunks
    };

    Ok(format_chunks(&chunks, format))
}

/// Returns `chunks` exactly as a client paging through them would receive
/// them, with boundary overlaps stripped.
#[must_use]
pub fn delivery_order(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let store = PaginationStore::new();
    store.reset(chunks);
    std::iter::from_fn(|| store.take_next()).collect()
}
