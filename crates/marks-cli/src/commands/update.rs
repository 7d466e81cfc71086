//! Update command implementation

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{draft_from, open_service, parse_id};
use crate::error::CliError;
use crate::output::{OutputFormat, print_bookmark};

/// Point the bookmark `id` at a new address.
///
/// The identifier follows the address, so the printed id differs from the
/// one given whenever the address actually changed.
pub async fn execute(
    config: Option<&Path>,
    id: &str,
    address: &str,
    protocol: Option<&str>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let id = parse_id(id)?;
    let draft = draft_from(address, protocol);
    let service = open_service(config)?;

    let bookmark = service.update(&id, draft).await.map_err(CliError::from)?;

    if format.is_machine_readable() {
        return print_bookmark(&bookmark, format);
    }
    if !quiet {
        println!("{} Updated {}", "✓".green(), bookmark.address().cyan());
        if bookmark.id == id {
            println!("  id: {}", bookmark.id);
        } else {
            println!("  id: {} (was {})", bookmark.id, id.to_string().dimmed());
        }
    }
    Ok(())
}
