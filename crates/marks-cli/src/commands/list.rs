//! List command implementation

use std::path::Path;

use anyhow::Result;

use super::open_service;
use crate::output::{OutputFormat, print_page};

/// Print page `page` of the collection, clamped to the last existing page.
pub fn execute(config: Option<&Path>, page: usize, format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    print_page(&service.list(page), format)
}
