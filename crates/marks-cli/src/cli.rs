//! # CLI Structure and Argument Parsing
//!
//! The command-line interface for `marks`, built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! marks add example.com/docs
//! marks add localhost:8080/health --protocol http://
//! marks list --page 1 --format json
//! marks get 6fa459ea-ee8a-3ca4-894e-db77e160355e
//! marks update 6fa459ea-ee8a-3ca4-894e-db77e160355e example.org
//! marks rm 6fa459ea-ee8a-3ca4-894e-db77e160355e
//! ```
//!
//! Addresses may carry their own `http://` or `https://` prefix; without one
//! (and without `--protocol`) they are stored under `https://`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::FormatArg;

/// Main CLI structure for the `marks` command
#[derive(Parser, Clone, Debug)]
#[command(name = "marks")]
#[command(version)]
#[command(about = "marks - verified, deduplicated local bookmarks", long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Read configuration from this file instead of the discovered one
    #[arg(long, global = true, env = "MARKS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List stored bookmarks, one page at a time
    List {
        /// Zero-based page number; pages past the end show the last page
        #[arg(long, default_value_t = 0)]
        page: usize,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Show a single bookmark
    Get {
        /// Bookmark identifier
        id: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Verify an address and store it
    Add {
        /// Address such as `example.com/path` or `http://localhost:8080`
        address: String,

        /// Protocol to store the address under (`http://` or `https://`)
        #[arg(long, value_name = "PROTOCOL")]
        protocol: Option<String>,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Point an existing bookmark at a new address
    Update {
        /// Identifier of the bookmark to change
        id: String,

        /// Replacement address
        address: String,

        /// Protocol to store the address under (`http://` or `https://`)
        #[arg(long, value_name = "PROTOCOL")]
        protocol: Option<String>,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Remove a bookmark
    #[command(alias = "remove")]
    Rm {
        /// Bookmark identifier
        id: String,
    },
}

impl Commands {
    /// The output format selected for this command, if it has one.
    pub const fn format(&self) -> Option<&FormatArg> {
        match self {
            Self::List { format, .. }
            | Self::Get { format, .. }
            | Self::Add { format, .. }
            | Self::Update { format, .. } => Some(format),
            Self::Rm { .. } => None,
        }
    }
}
