//! Command implementations for the marks CLI.
//!
//! Each submodule handles one subcommand. They all open the service through
//! [`open_service`], so configuration is resolved the same way everywhere.

mod add;
mod get;
mod list;
mod rm;
mod update;

pub use add::execute as add_bookmark;
pub use get::execute as get_bookmark;
pub use list::execute as list_bookmarks;
pub use rm::execute as remove_bookmark;
pub use update::execute as update_bookmark;

use std::path::Path;

use anyhow::Result;
use marks_core::validate::split_address;
use marks_core::{BookmarkId, BookmarkService, Config, Fetcher, FileSlot, NewBookmark};
use tracing::debug;

use crate::error::CliError;

/// Service over the configured slot, using `--config` when given.
pub fn open_service(config_path: Option<&Path>) -> Result<BookmarkService<FileSlot, Fetcher>> {
    let config = match config_path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load_from(path)
        },
        None => Config::load(),
    }
    .map_err(CliError::from)?;

    Ok(BookmarkService::from_config(&config).map_err(CliError::from)?)
}

/// Parse a bookmark identifier argument.
pub fn parse_id(raw: &str) -> Result<BookmarkId> {
    Ok(raw.parse::<BookmarkId>().map_err(CliError::usage)?)
}

/// Turn an address argument into a draft.
///
/// An explicit protocol takes the address verbatim as the url; otherwise a
/// leading `http://` or `https://` is split off.
pub fn draft_from(address: &str, protocol: Option<&str>) -> NewBookmark {
    match protocol {
        Some(protocol) => NewBookmark::new(protocol, address.trim()),
        None => split_address(address),
    }
}
