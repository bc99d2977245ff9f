//! Binary entry point for the CemBot relay.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use cembot_relay::cli::output::{OutputFormat, format_error};
use cembot_relay::cli::{Cli, Commands, execute};
use cembot_relay::telemetry;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_format);

    let format = match &cli.command {
        Commands::Split { format, .. } => OutputFormat::parse(format),
        Commands::Serve(_) => OutputFormat::Text,
    };

    match execute(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
                if let Err(e) = write!(io::stdout(), "{output}")
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    eprintln!("Error writing to stdout: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => println!("{error_output}"),
                OutputFormat::Text => eprintln!("Error: {error_output}"),
            }
            ExitCode::FAILURE
        }
    }
}
