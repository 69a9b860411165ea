//! Key-value backends for the portal store.
//!
//! A backend holds opaque string values under string keys, like browser local
//! storage. [`MemoryStore`] keeps them in process; [`FileStore`] writes one
//! file per key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{PortalError, PortalResult};

/// A string-valued key-value medium.
///
/// Writes replace the whole value and are visible to the next read.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> PortalResult<Option<String>>;

    /// Replaces the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> PortalResult<()>;

    /// Deletes the value under `key`. Deleting an absent key succeeds.
    fn remove_item(&self, key: &str) -> PortalResult<()>;
}

/// An in-process backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> PortalResult<Option<String>> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PortalResult<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> PortalResult<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}

/// A backend that stores each key as `<dir>/<key>.json`.
///
/// Values are written to a temporary sibling and renamed into place, so a
/// reader never observes a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a file store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> PortalResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| PortalError::StorageIo {
            key: dir.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    /// The directory holding the data files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn io_error(key: &str, error: std::io::Error) -> PortalError {
        PortalError::StorageIo {
            key: key.to_string(),
            message: error.to_string(),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> PortalResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> PortalResult<()> {
        let path = self.path_for(key);
        let staging = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&staging, value).map_err(|e| Self::io_error(key, e))?;
        fs::rename(&staging, &path).map_err(|e| Self::io_error(key, e))
    }

    fn remove_item(&self, key: &str) -> PortalResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}
