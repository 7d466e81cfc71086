//! Durable single-value storage for the serialized bookmark collection.
//!
//! The record store only needs one string-valued slot: it reads it once at
//! construction and overwrites it wholesale after every mutation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use crate::{Error, Result};

/// Key of the slot; also the stem of the on-disk file.
pub const SLOT_KEY: &str = "bookmarks-app-storage";

/// A single persisted string value.
pub trait DurableSlot: Send + Sync {
    /// Current contents, or `None` when nothing was ever written.
    fn get(&self) -> Result<Option<String>>;

    /// Replace the contents.
    fn set(&self, value: &str) -> Result<()>;
}

/// Slot backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot stored at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot stored as `<dir>/bookmarks-app-storage.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{SLOT_KEY}.json")))
    }

    /// File backing this slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DurableSlot for FileSlot {
    fn get(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn set(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Storage(format!("Failed to create data directory: {e}"))
                })?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .map_err(|e| Error::Storage(format!("Failed to write bookmarks: {e}")))?;

        #[cfg(target_os = "windows")]
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| Error::Storage(format!("Failed to remove existing bookmarks: {e}")))?;
        }
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| Error::Storage(format!("Failed to commit bookmarks: {e}")))?;

        debug!("Saved {} bytes to {}", value.len(), self.path.display());
        Ok(())
    }
}

/// In-memory slot. Clones share the same value, so a store can be reopened
/// from a clone to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    /// Empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
        }
    }

    /// Snapshot of the current contents.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DurableSlot for MemorySlot {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn set(&self, value: &str) -> Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        Ok(())
    }
}

impl<S: DurableSlot + ?Sized> DurableSlot for Arc<S> {
    fn get(&self) -> Result<Option<String>> {
        (**self).get()
    }

    fn set(&self, value: &str) -> Result<()> {
        (**self).set(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        assert_eq!(slot.get().unwrap(), None);
    }

    #[test]
    fn test_file_slot_overwrites_wholesale() {
        // Given: a slot in a not-yet-existing nested directory
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::in_dir(dir.path().join("nested").join("data"));

        // When: writing twice
        slot.set("[1,2,3]").unwrap();
        slot.set("[]").unwrap();

        // Then: only the latest value remains and no temp file is left behind
        assert_eq!(slot.get().unwrap().as_deref(), Some("[]"));
        assert!(!slot.path().with_extension("json.tmp").exists());
        assert!(slot.path().ends_with("bookmarks-app-storage.json"));
    }

    #[test]
    fn test_memory_slot_clones_share_contents() {
        let slot = MemorySlot::new();
        let clone = slot.clone();

        slot.set("hello").unwrap();

        assert_eq!(clone.get().unwrap().as_deref(), Some("hello"));
    }
}
