//! Persisted key-value storage.
//!
//! The app keeps two small values on the device: the id of the seat the
//! user booked and the serialized notification feed. Both live behind the
//! [`KeyValueStore`] trait so callers never care where the bytes end up.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Key under which the confirmed seat id is stored.
pub const BOOKED_SEAT_KEY: &str = "bookedSeat";

/// Key under which the notification feed is stored as a JSON array.
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// File name used by [`FileStore`] inside its data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// Errors from key-value store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the backing file failed.
    #[error("Failed to read store at {path}: {source}")]
    ReadError {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the backing file failed.
    #[error("Failed to write store at {path}: {source}")]
    WriteError {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of strings.
    #[error("Store file {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the corrupt file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The store refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A string-to-string store that survives restarts.
pub trait KeyValueStore {
    /// Look up `key`. Absent keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// Read the persisted booking, if any.
///
/// # Errors
///
/// Propagates backend read errors.
pub fn booked_seat<S: KeyValueStore + ?Sized>(store: &S) -> StoreResult<Option<String>> {
    store.get(BOOKED_SEAT_KEY)
}

/// In-process store.
///
/// Writes can be made to fail with [`MemoryStore::fail_writes`], which is how
/// the persistence-failure paths of the seat controller are exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail (or succeed again with `false`).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable(format!(
                "write of '{key}' rejected"
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The whole file is rewritten on every `set`; the data set is two keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store that keeps its file in `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE_NAME),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::ReadError {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        let write_err = |source| StoreError::WriteError {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(&entries).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(write_err)?;

        debug!(key, path = %self.path.display(), "Stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert!(store.get(BOOKED_SEAT_KEY).unwrap().is_none());

        store.set(BOOKED_SEAT_KEY, "3B").unwrap();
        assert_eq!(store.get(BOOKED_SEAT_KEY).unwrap().as_deref(), Some("3B"));
        assert_eq!(booked_seat(&store).unwrap().as_deref(), Some("3B"));

        store.set(BOOKED_SEAT_KEY, "4C").unwrap();
        assert_eq!(store.get(BOOKED_SEAT_KEY).unwrap().as_deref(), Some("4C"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        let err = store.set(BOOKED_SEAT_KEY, "1A").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(store.is_empty());

        store.fail_writes(false);
        store.set(BOOKED_SEAT_KEY, "1A").unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert!(store.get(BOOKED_SEAT_KEY).unwrap().is_none());

        store.set(BOOKED_SEAT_KEY, "7E").unwrap();
        store.set(NOTIFICATIONS_KEY, "[]").unwrap();

        let reopened = FileStore::new(dir.path().join("nested"));
        assert_eq!(reopened.get(BOOKED_SEAT_KEY).unwrap().as_deref(), Some("7E"));
        assert_eq!(reopened.get(NOTIFICATIONS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(store.path(), "not json").unwrap();

        let err = store.get(BOOKED_SEAT_KEY).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
