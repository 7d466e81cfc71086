//! marks CLI - verified, deduplicated local bookmarks
//!
//! Thin entry point; command handling lives in the library so integration
//! tests and the binary share one code path.

use std::process::ExitCode;

use colored::Colorize;
use marks_cli::error::category_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match marks_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            category_from_error(&err).as_exit_code()
        },
    }
}
