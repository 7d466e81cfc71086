//! Error types and handling for marks-core operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Write-path
//! failures (`DuplicateUrl`, `NotFound`, `UnreachableUrl`, `MalformedInput`)
//! are typed values handed back to the caller; none of them leave the record
//! store partially mutated.
//!
//! ## Error Categories
//!
//! - **Bookmark errors**: duplicates, missing records, unreachable addresses,
//!   input that fails the address grammar
//! - **I/O Errors**: reading or writing the durable slot
//! - **Network Errors**: transport failures from the HTTP client
//! - **Serialization Errors**: JSON/TOML encoding and decoding
//! - **Storage / Configuration Errors**: slot placement and config files
//!
//! ```rust
//! use marks_core::{Error, Result};
//!
//! fn describe(result: Result<()>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(e @ (Error::DuplicateUrl | Error::NotFound)) => e.to_string(),
//!         Err(e) if e.is_recoverable() => format!("try again later: {e}"),
//!         Err(e) => format!("{} error: {e}", e.category()),
//!     }
//! }
//!
//! assert_eq!(
//!     describe(Err(Error::DuplicateUrl)),
//!     "Bookmark with given URL already exists"
//! );
//! ```

use thiserror::Error;

/// The main error type for marks-core operations.
///
/// The `Display` text of the bookmark variants is the exact reason string a
/// presentation layer shows to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// A bookmark with the same protocol and url is already stored.
    #[error("Bookmark with given URL already exists")]
    DuplicateUrl,

    /// No bookmark carries the requested identifier.
    #[error("Bookmark not found")]
    NotFound,

    /// Neither the direct request nor the relay fallback reached the address.
    ///
    /// Transport failures, error statuses and timeouts all fold into this
    /// variant once the fallback has been tried.
    #[error("URL not found")]
    UnreachableUrl {
        /// Full address (`protocol + url`) that failed verification.
        address: String,
    },

    /// Protocol or url does not match the accepted grammar.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// I/O operation failed.
    ///
    /// Covers reading and writing the durable slot file and creating its
    /// parent directories.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Raised by the HTTP transport for a single attempt. The verifier turns
    /// these into [`Error::UnreachableUrl`] after the fallback.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A single network attempt exceeded its time budget.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage operation failed.
    ///
    /// Used when the slot location cannot be determined or a stored record
    /// is no longer where the caller expected it.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Returns `true` for timeouts, connection failures and interrupted I/O.
    /// An unreachable URL is reported as permanent: the verifier has already
    /// used its single fallback.
    ///
    /// ```rust
    /// use marks_core::Error;
    ///
    /// assert!(Error::Timeout("primary attempt".to_string()).is_recoverable());
    /// assert!(!Error::DuplicateUrl.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout(_) => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Stable snake_case names used for logging and JSON error output:
    /// `duplicate_url`, `not_found`, `unreachable_url`, `malformed_input`,
    /// `io`, `network`, `timeout`, `serialization`, `storage`, `config`.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::DuplicateUrl => "duplicate_url",
            Self::NotFound => "not_found",
            Self::UnreachableUrl { .. } => "unreachable_url",
            Self::MalformedInput(_) => "malformed_input",
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Serialization(_) => "serialization",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
