//! Rm command implementation
//!
//! Removing an identifier that is not stored is not an error; a notice is
//! printed and the command succeeds.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{open_service, parse_id};
use crate::error::CliError;

/// Remove the bookmark `id` if present.
pub fn execute(config: Option<&Path>, id: &str, quiet: bool) -> Result<()> {
    let id = parse_id(id)?;
    let service = open_service(config)?;

    let removed = service.remove(&id).map_err(CliError::from)?;

    if !quiet {
        if removed {
            println!("{} Removed bookmark {}", "✓".green(), id.to_string().red());
        } else {
            println!("Bookmark {id} not found, nothing removed");
        }
    }
    Ok(())
}
