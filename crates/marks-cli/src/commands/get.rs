//! Get command implementation

use std::path::Path;

use anyhow::{Result, anyhow};

use super::{open_service, parse_id};
use crate::error::CliError;
use crate::output::{OutputFormat, print_bookmark};

/// Print the bookmark with `id`, failing with a not-found exit code if absent.
pub fn execute(config: Option<&Path>, id: &str, format: OutputFormat) -> Result<()> {
    let id = parse_id(id)?;
    let service = open_service(config)?;

    match service.get(&id) {
        Some(bookmark) => print_bookmark(&bookmark, format),
        None => Err(CliError::not_found(anyhow!("Bookmark not found: {id}")).into()),
    }
}
