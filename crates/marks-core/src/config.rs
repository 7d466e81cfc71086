//! Configuration management for marks.
//!
//! Configuration is a small TOML document. Every field has a default, so a
//! missing file is equivalent to an empty one.
//!
//! ## Resolution
//!
//! 1. **Config file**: `MARKS_CONFIG_DIR/config.toml`, else
//!    `XDG_CONFIG_HOME/marks/config.toml`, else the platform config dir
//! 2. **Data directory**: `MARKS_DATA_DIR`, else `XDG_DATA_HOME/marks`, else
//!    the platform data dir
//! 3. **Slot file**: `[storage] path` if set, else
//!    `<data dir>/bookmarks-app-storage.json`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [storage]
//! path = "/home/user/bookmarks.json"
//!
//! [verify]
//! enabled = true
//! timeout_secs = 10
//! relay_prefix = "https://cors-anywhere.herokuapp.com/"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::slot::{FileSlot, SLOT_KEY};
use crate::verifier::{DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_RELAY_PREFIX};
use crate::{Error, Result};

const APP_DIR: &str = "marks";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the durable slot lives.
    pub storage: StorageConfig,
    /// Reachability verification settings.
    pub verify: VerifyConfig,
}

/// Durable slot placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit slot file; overrides the data directory.
    pub path: Option<PathBuf>,
}

/// Reachability verification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// When false, create and update commit without network calls.
    pub enabled: bool,
    /// Time budget for each of the two attempts, in seconds.
    pub timeout_secs: u64,
    /// Prefix prepended to the full address for the fallback attempt.
    pub relay_prefix: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: DEFAULT_ATTEMPT_TIMEOUT.as_secs(),
            relay_prefix: DEFAULT_RELAY_PREFIX.to_string(),
        }
    }
}

impl VerifyConfig {
    /// Per-attempt time budget.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load from the discovered config file, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.check()?;
        Ok(config)
    }

    /// Write to an explicit file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.verify.timeout_secs == 0 {
            return Err(Error::Config(
                "verify.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the config file consulted by [`Config::load`].
    pub fn config_path() -> Result<PathBuf> {
        if let Some(dir) = env_dir("MARKS_CONFIG_DIR") {
            return Ok(dir.join(CONFIG_FILE));
        }
        if let Some(xdg) = env_dir("XDG_CONFIG_HOME") {
            return Ok(xdg.join(APP_DIR).join(CONFIG_FILE));
        }
        let dirs = directories::ProjectDirs::from("dev", "outfitter", APP_DIR)
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Directory holding the durable slot.
    pub fn data_dir() -> Result<PathBuf> {
        if let Some(dir) = env_dir("MARKS_DATA_DIR") {
            return Ok(dir);
        }
        if let Some(xdg) = env_dir("XDG_DATA_HOME") {
            return Ok(xdg.join(APP_DIR));
        }
        let dirs = directories::ProjectDirs::from("dev", "outfitter", APP_DIR)
            .ok_or_else(|| Error::Storage("Failed to determine data directory".into()))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Resolved location of the slot file.
    pub fn slot_path(&self) -> Result<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join(format!("{SLOT_KEY}.json"))),
        }
    }

    /// File slot at [`Config::slot_path`].
    pub fn slot(&self) -> Result<FileSlot> {
        Ok(FileSlot::new(self.slot_path()?))
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.verify.enabled);
        assert_eq!(config.verify.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.verify.relay_prefix,
            "https://cors-anywhere.herokuapp.com/"
        );
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[verify]\nenabled = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(!config.verify.enabled);
        assert_eq!(config.verify.timeout_secs, 10);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.storage.path = Some(dir.path().join("marks.json"));
        config.verify.relay_prefix = "https://relay.test/".to_string();

        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_explicit_slot_path_wins() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/tmp/elsewhere.json"));

        assert_eq!(
            config.slot_path().unwrap(),
            PathBuf::from("/tmp/elsewhere.json")
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[verify\nenabled = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[verify]\ntimeout_secs = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
