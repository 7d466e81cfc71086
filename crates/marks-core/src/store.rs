//! Authoritative in-memory bookmark collection backed by a durable slot.
//!
//! The collection is loaded once when the store is opened. Every mutation
//! re-serializes the whole collection and overwrites the slot before it is
//! considered committed; if that write fails the in-memory change is undone.
//! A mutex covers each read-modify-write together with its durable overwrite,
//! so parallel callers cannot lose each other's updates.
//!
//! Records handed out are clones. Callers never alias the internal vector.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::slot::DurableSlot;
use crate::types::{Bookmark, BookmarkId, Page};
use crate::{Error, Result};

/// Fixed number of records per page.
pub const PAGE_SIZE: usize = 20;

/// Ordered bookmark collection with whole-collection persistence.
pub struct RecordStore<S: DurableSlot> {
    slot: S,
    records: Mutex<Vec<Bookmark>>,
}

impl<S: DurableSlot> RecordStore<S> {
    /// Open the store, reading the slot once.
    ///
    /// Absent or blank contents start an empty collection. Contents that do
    /// not parse are logged and also start an empty collection; the next
    /// mutation overwrites them. Only a failure to read the slot at all is
    /// returned.
    pub fn open(slot: S) -> Result<Self> {
        let records = match slot.get()? {
            Some(raw) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<Bookmark>>(&raw) {
                    Ok(records) => {
                        let records = dedupe(records);
                        info!("Loaded {} bookmarks", records.len());
                        records
                    },
                    Err(e) => {
                        warn!("Error parsing bookmarks JSON, starting empty: {e}");
                        Vec::new()
                    },
                }
            },
            _ => {
                debug!("No stored bookmarks, starting empty");
                Vec::new()
            },
        };

        Ok(Self {
            slot,
            records: Mutex::new(records),
        })
    }

    /// The slot this store persists to.
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Bookmark>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, records: &[Bookmark]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.slot.set(&json)
    }

    /// Number of stored records.
    pub fn total_count(&self) -> usize {
        self.lock().len()
    }

    /// Number of pages of [`PAGE_SIZE`] records, rounded up.
    pub fn page_count(&self) -> usize {
        self.total_count().div_ceil(PAGE_SIZE)
    }

    /// Records `[page * PAGE_SIZE, page * PAGE_SIZE + PAGE_SIZE)`.
    ///
    /// Pages past the end are empty.
    pub fn get_page(&self, page: usize) -> Vec<Bookmark> {
        let records = self.lock();
        let start = page.saturating_mul(PAGE_SIZE);
        records
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Page `page` clamped to the last existing page, with the counts it was
    /// clamped against, all read under one lock.
    pub fn clamped_page(&self, page: usize) -> Page {
        let records = self.lock();
        let total_count = records.len();
        let page_count = total_count.div_ceil(PAGE_SIZE);
        let page = page.min(page_count.saturating_sub(1));
        let start = page.saturating_mul(PAGE_SIZE);
        Page {
            page,
            records: records.iter().skip(start).take(PAGE_SIZE).cloned().collect(),
            total_count,
            page_count,
        }
    }

    /// Position and copy of the record with `id`.
    pub fn get_by_id(&self, id: &BookmarkId) -> Option<(usize, Bookmark)> {
        self.lock()
            .iter()
            .enumerate()
            .find(|(_, bookmark)| bookmark.id == *id)
            .map(|(index, bookmark)| (index, bookmark.clone()))
    }

    /// Append a record and persist.
    ///
    /// Fails with [`Error::DuplicateUrl`] if a record with the same id was
    /// committed in the meantime.
    pub fn add(&self, bookmark: Bookmark) -> Result<()> {
        let mut records = self.lock();
        if records.iter().any(|existing| existing.id == bookmark.id) {
            return Err(Error::DuplicateUrl);
        }

        let id = bookmark.id;
        records.push(bookmark);
        if let Err(e) = self.persist(&records) {
            records.pop();
            return Err(e);
        }

        debug!("Added bookmark {id} at index {}", records.len() - 1);
        Ok(())
    }

    /// Replace the record at `index` in place and persist.
    ///
    /// `expected` is the id the caller found at `index`; if the collection
    /// shifted since then the call fails with [`Error::NotFound`]. The new
    /// record may carry a different id, but not one held by another record.
    pub fn replace_at(&self, index: usize, expected: &BookmarkId, bookmark: Bookmark) -> Result<()> {
        let mut records = self.lock();
        match records.get(index) {
            Some(current) if current.id == *expected => {},
            _ => return Err(Error::NotFound),
        }
        if records
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.id == bookmark.id)
        {
            return Err(Error::DuplicateUrl);
        }

        let previous = std::mem::replace(&mut records[index], bookmark);
        if let Err(e) = self.persist(&records) {
            records[index] = previous;
            return Err(e);
        }

        debug!("Replaced bookmark {} at index {index}", previous.id);
        Ok(())
    }

    /// Remove the record at `index`, persist, and return it.
    ///
    /// Like [`Self::replace_at`], `expected` guards against a stale index.
    pub fn remove_at(&self, index: usize, expected: &BookmarkId) -> Result<Bookmark> {
        let mut records = self.lock();
        match records.get(index) {
            Some(current) if current.id == *expected => {},
            _ => return Err(Error::NotFound),
        }

        let removed = records.remove(index);
        if let Err(e) = self.persist(&records) {
            records.insert(index, removed);
            return Err(e);
        }

        debug!("Removed bookmark {} from index {index}", removed.id);
        Ok(removed)
    }
}

/// Keep the first record for each id; later copies are dropped with a warning.
fn dedupe(records: Vec<Bookmark>) -> Vec<Bookmark> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|bookmark| {
            let first = seen.insert(bookmark.id);
            if !first {
                warn!("Dropping stored duplicate of bookmark {}", bookmark.id);
            }
            first
        })
        .collect()
}
