use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::{Error, Result};

/// Content-derived identifier of a bookmark.
///
/// Serialized as the hyphenated UUID string so the durable slot stays a plain
/// `{id, protocol, url}` JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(Uuid);

impl BookmarkId {
    /// Wrap an already derived UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for BookmarkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| Error::MalformedInput(format!("invalid bookmark id '{s}': {e}")))
    }
}

/// A stored `(id, protocol, url)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Derived from `protocol + url`; see [`crate::identity::derive`].
    pub id: BookmarkId,
    /// Scheme including the separator, `http://` or `https://`.
    pub protocol: String,
    /// Remainder of the address after the scheme.
    pub url: String,
}

impl Bookmark {
    /// Full address the bookmark points at.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}{}", self.protocol, self.url)
    }

    /// Whether `draft` names the same address as this record.
    #[must_use]
    pub fn same_address(&self, draft: &NewBookmark) -> bool {
        self.protocol == draft.protocol && self.url == draft.url
    }
}

/// Candidate bookmark submitted for create or update, before an id exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    /// Scheme as entered, validated before use.
    pub protocol: String,
    /// Address remainder as entered, validated before use.
    pub url: String,
}

impl NewBookmark {
    /// Draft from its two address parts.
    pub fn new(protocol: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            url: url.into(),
        }
    }

    /// Full address the draft points at.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}{}", self.protocol, self.url)
    }

    /// Attach an identifier, producing the record that gets stored.
    #[must_use]
    pub fn with_id(self, id: BookmarkId) -> Bookmark {
        Bookmark {
            id,
            protocol: self.protocol,
            url: self.url,
        }
    }
}

impl From<Bookmark> for NewBookmark {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            protocol: bookmark.protocol,
            url: bookmark.url,
        }
    }
}

/// One page of the collection as handed to list callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Zero-based page number after clamping.
    pub page: usize,
    /// Copies of the records on this page, in collection order.
    pub records: Vec<Bookmark>,
    /// Records in the whole collection.
    pub total_count: usize,
    /// Pages of [`crate::PAGE_SIZE`] records, rounded up.
    pub page_count: usize,
}
