//! # marks-core
//!
//! Core functionality for marks - a small, durable collection of verified
//! bookmarks.
//!
//! Bookmarks are `(id, protocol, url)` records. The identifier is derived from
//! the address itself, so the same address can only be stored once. New and
//! changed addresses are checked for reachability before they are committed,
//! and the whole collection is persisted as one JSON array after every change.
//!
//! ## Architecture
//!
//! - **Identity**: name-based UUIDs over `protocol + url`
//! - **Verification**: direct GET with a single relay fallback
//! - **Store**: ordered, paginated collection over a durable slot
//! - **Service**: create/update/delete/list orchestration with typed failures
//! - **Configuration**: TOML settings for slot placement and verification
//!
//! ## Quick Start
//!
//! ```rust
//! use marks_core::{BookmarkService, MemorySlot, RecordStore, Verifier, Fetcher, NewBookmark};
//!
//! # async fn demo() -> marks_core::Result<()> {
//! let store = RecordStore::open(MemorySlot::new())?;
//! let service = BookmarkService::new(store, Verifier::new(Fetcher::new()?));
//!
//! let bookmark = service.add(NewBookmark::new("https://", "example.com")).await?;
//! let page = service.list(0);
//! assert_eq!(page.records, vec![bookmark]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. Write-path failures carry the
//! reason string meant for the user:
//!
//! ```rust
//! use marks_core::Error;
//!
//! let err = Error::UnreachableUrl { address: "http://dead.example/x".into() };
//! assert_eq!(err.to_string(), "URL not found");
//! ```

/// Configuration loading and path resolution
pub mod config;
/// Error types and result aliases
pub mod error;
/// HTTP transport used for reachability checks
pub mod fetcher;
/// Content-derived bookmark identifiers
pub mod identity;
/// Create/update/delete/list orchestration
pub mod service;
/// Durable single-value storage
pub mod slot;
/// Ordered, paginated record store
pub mod store;
/// Core data types
pub mod types;
/// Address grammar and input splitting
pub mod validate;
/// Reachability verification with relay fallback
pub mod verifier;

pub use config::{Config, StorageConfig, VerifyConfig};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, Transport};
pub use service::BookmarkService;
pub use slot::{DurableSlot, FileSlot, MemorySlot};
pub use store::{PAGE_SIZE, RecordStore};
pub use types::*;
pub use verifier::Verifier;
