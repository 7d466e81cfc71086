//! # Output Formatting
//!
//! Commands render either colored, human-readable text or JSON. JSON output
//! uses the camelCase field names of the core types so scripts can rely on
//! `totalCount`, `pageCount` and friends.
//!
//! ```bash
//! marks list --format json | jq '.records[].url'
//! marks add example.com --json
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use is_terminal::IsTerminal;
use marks_core::{Bookmark, Page};
use serde::{Deserialize, Serialize};

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted text.
    #[default]
    Text,
    /// Pretty-printed JSON for machine consumption.
    Json,
}

impl OutputFormat {
    /// Check if this format is machine-readable.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Shared `--format` / `--json` arguments.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArg {
    /// Effective format after applying the `--json` shorthand.
    #[must_use]
    pub const fn resolve(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Whether stdout is a terminal; used to decide on trailing hints.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Print one bookmark.
pub fn print_bookmark(bookmark: &Bookmark, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", bookmark.address().cyan());
            println!("  id: {}", bookmark.id.to_string().dimmed());
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(bookmark)?),
    }
    Ok(())
}

/// Print one page of the collection.
pub fn print_page(page: &Page, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_page_text(page),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
    }
    Ok(())
}

fn print_page_text(page: &Page) {
    if page.records.is_empty() {
        println!("No bookmarks yet");
        if stdout_is_terminal() {
            println!("  Add one with: marks add <ADDRESS>");
        }
        return;
    }

    for bookmark in &page.records {
        println!(
            "{}  {}",
            bookmark.id.to_string().dimmed(),
            bookmark.address().cyan()
        );
    }
    println!(
        "\n{} bookmarks, page {} (last page {})",
        page.total_count,
        page.page.to_string().bold(),
        page.page_count.saturating_sub(1)
    );
}
