//! Add command implementation
//!
//! ```bash
//! marks add example.com/docs
//! marks add http://localhost:8080/health
//! marks add localhost:8080 --protocol http://
//! ```

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::{draft_from, open_service};
use crate::error::CliError;
use crate::output::{OutputFormat, print_bookmark};

/// Verify the address and commit a new bookmark.
pub async fn execute(
    config: Option<&Path>,
    address: &str,
    protocol: Option<&str>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let draft = draft_from(address, protocol);
    let service = open_service(config)?;

    let bookmark = service.add(draft).await.map_err(CliError::from)?;

    if format.is_machine_readable() {
        return print_bookmark(&bookmark, format);
    }
    if !quiet {
        println!("{} Added {}", "✓".green(), bookmark.address().cyan());
        println!("  id: {}", bookmark.id);
    }
    Ok(())
}
