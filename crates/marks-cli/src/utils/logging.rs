//! Logging initialization and configuration.
//!
//! Sets up the tracing subscriber and color control based on CLI flags and
//! environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Level selected by the global flags and the command's output format.
///
/// JSON output drops to ERROR unless `--verbose` was given, so stderr stays
/// quiet for scripts.
pub fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        return Level::DEBUG;
    }
    if cli.quiet || machine_output(cli) {
        return Level::ERROR;
    }
    Level::WARN
}

fn machine_output(cli: &Cli) -> bool {
    cli.command
        .format()
        .is_some_and(|format| format.resolve().is_machine_readable())
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, or when emitting machine output
    let env_no_color = std::env::var("NO_COLOR").ok().is_some();
    if cli.no_color || env_no_color || machine_output(cli) {
        color_control::set_override(false);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn level_for(args: &[&str]) -> Level {
        log_level(&Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(level_for(&["marks", "list"]), Level::WARN);
    }

    #[test]
    fn test_verbose_and_quiet() {
        assert_eq!(level_for(&["marks", "--verbose", "list"]), Level::DEBUG);
        assert_eq!(level_for(&["marks", "--quiet", "rm", "x"]), Level::ERROR);
    }

    #[test]
    fn test_json_output_silences_logs_unless_verbose() {
        assert_eq!(level_for(&["marks", "list", "--format", "json"]), Level::ERROR);
        assert_eq!(level_for(&["marks", "-v", "get", "x", "--json"]), Level::DEBUG);
    }
}
