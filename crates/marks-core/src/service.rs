//! Bookmark orchestration: validation, deduplication, verification, commit.
//!
//! Create and update run the same short pipeline:
//!
//! ```text
//! validate -> derive id -> duplicate check -> verify -> commit
//! ```
//!
//! The only suspension points are the verifier's direct and relay requests.
//! A failure at any stage is returned to the caller and leaves the store
//! untouched.

use tracing::{debug, info};

use crate::config::Config;
use crate::fetcher::{Fetcher, Transport};
use crate::identity::derive;
use crate::slot::{DurableSlot, FileSlot};
use crate::store::RecordStore;
use crate::types::{Bookmark, BookmarkId, NewBookmark, Page};
use crate::validate::validate;
use crate::verifier::Verifier;
use crate::{Error, Result};

/// Entry point for UI, CLI and API layers.
pub struct BookmarkService<S: DurableSlot, T: Transport> {
    store: RecordStore<S>,
    verifier: Verifier<T>,
    verify_enabled: bool,
}

impl<S: DurableSlot, T: Transport> BookmarkService<S, T> {
    /// Service over `store`, verifying new addresses with `verifier`.
    pub const fn new(store: RecordStore<S>, verifier: Verifier<T>) -> Self {
        Self {
            store,
            verifier,
            verify_enabled: true,
        }
    }

    /// Skip reachability checks (offline use).
    #[must_use]
    pub const fn without_verification(mut self) -> Self {
        self.verify_enabled = false;
        self
    }

    /// The underlying record store.
    pub const fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    async fn verify(&self, draft: &NewBookmark) -> Result<()> {
        if self.verify_enabled {
            self.verifier.verify(&draft.protocol, &draft.url).await
        } else {
            debug!("Verification disabled, accepting {}", draft.address());
            Ok(())
        }
    }

    /// Page `page` of the collection, clamped to the last existing page.
    pub fn list(&self, page: usize) -> Page {
        self.store.clamped_page(page)
    }

    /// Copy of the record with `id`.
    pub fn get(&self, id: &BookmarkId) -> Option<Bookmark> {
        self.store.get_by_id(id).map(|(_, bookmark)| bookmark)
    }

    /// Create a bookmark.
    ///
    /// Fails with [`Error::MalformedInput`], [`Error::DuplicateUrl`] or
    /// [`Error::UnreachableUrl`]; only a verified, unique record is stored.
    pub async fn add(&self, draft: NewBookmark) -> Result<Bookmark> {
        validate(&draft)?;

        let id = derive(&draft.protocol, &draft.url);
        if self.store.get_by_id(&id).is_some() {
            return Err(Error::DuplicateUrl);
        }

        self.verify(&draft).await?;

        let bookmark = draft.with_id(id);
        self.store.add(bookmark.clone())?;
        info!("Added bookmark {} ({})", bookmark.id, bookmark.address());
        Ok(bookmark)
    }

    /// Point the bookmark `id` at a new address.
    ///
    /// Submitting the current address returns immediately without a network
    /// call or write. Otherwise the new address is validated, deduplicated and
    /// verified like a create, and the record is replaced in place under the
    /// identifier derived from the new address.
    pub async fn update(&self, id: &BookmarkId, draft: NewBookmark) -> Result<Bookmark> {
        let (index, existing) = self.store.get_by_id(id).ok_or(Error::NotFound)?;

        if existing.same_address(&draft) {
            debug!("Bookmark {} unchanged, skipping verification", id);
            return Ok(existing);
        }

        validate(&draft)?;

        let new_id = derive(&draft.protocol, &draft.url);
        if new_id != existing.id && self.store.get_by_id(&new_id).is_some() {
            return Err(Error::DuplicateUrl);
        }

        self.verify(&draft).await?;

        let bookmark = draft.with_id(new_id);
        self.store.replace_at(index, &existing.id, bookmark.clone())?;
        info!(
            "Updated bookmark {} -> {} ({})",
            existing.id,
            bookmark.id,
            bookmark.address()
        );
        Ok(bookmark)
    }

    /// Remove the bookmark `id`. Returns `false` when no such record exists.
    pub fn remove(&self, id: &BookmarkId) -> Result<bool> {
        let Some((index, _)) = self.store.get_by_id(id) else {
            return Ok(false);
        };

        match self.store.remove_at(index, id) {
            Ok(removed) => {
                info!("Removed bookmark {} ({})", removed.id, removed.address());
                Ok(true)
            },
            // Removed concurrently between lookup and removal
            Err(Error::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl BookmarkService<FileSlot, Fetcher> {
    /// Service over the configured slot file and a real HTTP transport.
    pub fn from_config(config: &Config) -> Result<Self> {
        let slot = config.slot()?;
        debug!("Opening bookmarks at {}", slot.path().display());
        let store = RecordStore::open(slot)?;
        let verifier = Verifier::new(Fetcher::with_timeout(config.verify.timeout())?)
            .with_relay_prefix(config.verify.relay_prefix.clone())
            .with_attempt_timeout(config.verify.timeout());

        let service = Self::new(store, verifier);
        Ok(if config.verify.enabled {
            service
        } else {
            service.without_verification()
        })
    }
}
