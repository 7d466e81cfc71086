//! marks CLI - verified, deduplicated local bookmarks
//!
//! Entry point for the `marks` command-line interface. Command
//! implementations live in separate modules; this module parses arguments,
//! sets up logging and dispatches.
use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::utils::initialize_logging;
use cli::{Cli, Commands};

/// Execute the marks CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if logging setup or command execution fails. Errors
/// carry a [`error::CliError`] category where one applies.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;
    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let config = cli.config.as_deref();
    match cli.command {
        Commands::List { page, format } => {
            commands::list_bookmarks(config, page, format.resolve())?;
        },
        Commands::Get { id, format } => {
            commands::get_bookmark(config, &id, format.resolve())?;
        },
        Commands::Add {
            address,
            protocol,
            format,
        } => {
            commands::add_bookmark(
                config,
                &address,
                protocol.as_deref(),
                format.resolve(),
                quiet,
            )
            .await?;
        },
        Commands::Update {
            id,
            address,
            protocol,
            format,
        } => {
            commands::update_bookmark(
                config,
                &id,
                &address,
                protocol.as_deref(),
                format.resolve(),
                quiet,
            )
            .await?;
        },
        Commands::Rm { id } => commands::remove_bookmark(config, &id, quiet)?,
    }
    Ok(())
}
