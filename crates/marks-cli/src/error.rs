//! CLI error handling with semantic exit codes.
//!
//! Failures are categorized so shell scripts can branch on the exit code
//! without parsing messages.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments, malformed input or configuration |
//! | 3 | `NotFound` | Requested bookmark does not exist |
//! | 4 | `Duplicate` | A bookmark with the same address already exists |
//! | 5 | `Network` | Address unreachable or fetch failure |
//! | 6 | `Timeout` | Operation timed out |
//! | 7 | `Integrity` | Stored data could not be (de)serialized |
//!
//! # Usage
//!
//! ```bash
//! marks add example.com
//! case $? in
//!     0) echo "Added" ;;
//!     4) echo "Already bookmarked" ;;
//!     5) echo "Unreachable" ;;
//! esac
//! ```

use std::fmt;
use std::process::ExitCode;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments, malformed input or configuration (exit code 2).
    Usage = 2,

    /// Requested bookmark not found (exit code 3).
    NotFound = 3,

    /// Address already bookmarked (exit code 4).
    Duplicate = 4,

    /// Unreachable address or network failure (exit code 5).
    Network = 5,

    /// Operation timed out (exit code 6).
    Timeout = 6,

    /// Stored data corrupted or unreadable (exit code 7).
    Integrity = 7,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Category for a library error.
    #[must_use]
    pub const fn from_core(err: &marks_core::Error) -> Self {
        use marks_core::Error;

        match err {
            Error::DuplicateUrl => Self::Duplicate,
            Error::NotFound => Self::NotFound,
            Error::UnreachableUrl { .. } | Error::Network(_) => Self::Network,
            Error::MalformedInput(_) | Error::Config(_) => Self::Usage,
            Error::Timeout(_) => Self::Timeout,
            Error::Serialization(_) => Self::Integrity,
            Error::Io(_) | Error::Storage(_) => Self::Internal,
        }
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` so context chains survive while the category
/// decides the exit code.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }
}

impl From<marks_core::Error> for CliError {
    fn from(err: marks_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the category of an `anyhow::Error`.
///
/// Categorized errors keep their category, bare library errors are mapped
/// by variant, anything else is internal.
#[must_use]
pub fn category_from_error(err: &anyhow::Error) -> ErrorCategory {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.category;
    }
    if let Some(core_err) = err.downcast_ref::<marks_core::Error>() {
        return ErrorCategory::from_core(core_err);
    }
    ErrorCategory::Internal
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use marks_core::Error;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCategory::Internal.exit_code(), 1);
        assert_eq!(ErrorCategory::Usage.exit_code(), 2);
        assert_eq!(ErrorCategory::NotFound.exit_code(), 3);
        assert_eq!(ErrorCategory::Duplicate.exit_code(), 4);
        assert_eq!(ErrorCategory::Network.exit_code(), 5);
        assert_eq!(ErrorCategory::Timeout.exit_code(), 6);
        assert_eq!(ErrorCategory::Integrity.exit_code(), 7);
    }

    #[test]
    fn test_core_errors_map_to_categories() {
        let cases = [
            (Error::DuplicateUrl, ErrorCategory::Duplicate),
            (Error::NotFound, ErrorCategory::NotFound),
            (
                Error::UnreachableUrl {
                    address: "https://dead.example".into(),
                },
                ErrorCategory::Network,
            ),
            (Error::MalformedInput("url".into()), ErrorCategory::Usage),
            (Error::Config("bad".into()), ErrorCategory::Usage),
            (Error::Timeout("slow".into()), ErrorCategory::Timeout),
            (Error::Serialization("bad".into()), ErrorCategory::Integrity),
            (Error::Storage("disk".into()), ErrorCategory::Internal),
        ];

        for (err, expected) in cases {
            assert_eq!(ErrorCategory::from_core(&err), expected, "{err}");
        }
    }

    #[test]
    fn test_cli_error_keeps_core_message() {
        let err = CliError::from(Error::DuplicateUrl);

        assert_eq!(err.to_string(), "Bookmark with given URL already exists");
        assert_eq!(err.category, ErrorCategory::Duplicate);
    }

    #[test]
    fn test_usage_errors_exit_with_code_2() {
        let err = anyhow::Error::new(CliError::usage(anyhow!("bad id")));

        let category = category_from_error(&err);

        assert_eq!(category, ErrorCategory::Usage);
        assert_eq!(category.exit_code(), 2);
    }

    #[test]
    fn test_category_from_wrapped_errors() {
        let categorized = anyhow::Error::new(CliError::not_found(anyhow!("gone")));
        assert_eq!(category_from_error(&categorized), ErrorCategory::NotFound);

        let bare = anyhow::Error::new(Error::UnreachableUrl {
            address: "https://dead.example".into(),
        });
        assert_eq!(category_from_error(&bare), ErrorCategory::Network);

        assert_eq!(
            category_from_error(&anyhow!("something else")),
            ErrorCategory::Internal
        );
    }
}
