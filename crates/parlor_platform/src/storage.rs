//! Key-value storage capabilities
//!
//! Values are always strings; typed interpretation belongs to the codec
//! layer above. Backends are selected per store at construction and are not
//! switchable afterward.

use crate::error::{PlatformError, Result};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// A key-value persistence capability.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Session-scoped storage: contents live exactly as long as the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Absent-host stub: reads find nothing, writes succeed without effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStorage;

impl StorageBackend for NoopStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Durable storage backed by a TOML table of string keys and values.
///
/// The table is loaded once at open and rewritten in full on every mutation.
/// A `BTreeMap` keeps the on-disk table deterministically ordered.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the table at `path`, starting empty when the file does not
    /// exist. Corrupt or unreadable contents degrade to an empty table with
    /// a warning; the first mutation rewrites the file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(table) => table,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring corrupt storage table at {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read storage table at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let raw = toml::to_string(entries).map_err(|e| PlatformError::StorageFlush {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, raw).map_err(|e| PlatformError::StorageFlush {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_owned(), value.to_owned());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trips_values() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("dark".to_string()));

        storage.remove("theme").unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn noop_accepts_everything_and_stores_nothing() {
        let storage = NoopStorage;
        storage.set("isHost", "true").unwrap();
        assert_eq!(storage.get("isHost").unwrap(), None);
        storage.remove("isHost").unwrap();
    }

    #[test]
    fn file_round_trips_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        {
            let storage = FileStorage::open(&path);
            storage.set("useStar", "true").unwrap();
            storage.set("theme", "system").unwrap();
        }

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("useStar").unwrap(), Some("true".to_string()));
        assert_eq!(reopened.get("theme").unwrap(), Some("system".to_string()));
    }

    #[test]
    fn file_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let storage = FileStorage::open(&path);
        storage.set("isHost", "true").unwrap();
        storage.remove("isHost").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("isHost").unwrap(), None);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "not [ valid { toml").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("theme").unwrap(), None);

        // Still writable after the bad load.
        storage.set("theme", "light").unwrap();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("theme").unwrap(), Some("light".to_string()));
    }
}
