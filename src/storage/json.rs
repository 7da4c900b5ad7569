//! JSON file-based key-value backend.
//!
//! This module provides a human-readable store using JSON serialization. It
//! uses atomic file writes (write-to-temp + rename) so the file is never left
//! half written.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(log n) - the whole file is loaded into memory once
//! - **Write**: O(n) - serializes and writes the entire dataset
//! - **Best for**: a handful of small keys written on user interaction

use crate::domain::error::{ExplorerError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Raw values by key.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Every entry lives in memory and each [`write`](KeyValueStore::write) flushes
/// the whole file before returning.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "spacex-favorites": "[\"5eb87cd9ffd86e000604b32a\"]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file, loaded on creation.
    data: StorageData,
}

impl JsonFileStore {
    /// Creates or opens a JSON store at `file_path`.
    ///
    /// Parent directories are created automatically. A file that exists but is
    /// not valid UTF-8 JSON is moved aside to `<name>.corrupt` and the store
    /// starts empty; an unreadable file is left alone and the store also starts
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use spacex_explorer::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/spacex-explorer/storage.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store initialized");

        Ok(Self { file_path, data })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> StorageData {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, path = ?path, "store file is unreadable, starting empty");
                return StorageData::default();
            }
        };

        let parsed = String::from_utf8(bytes)
            .map_err(|e| e.to_string())
            .and_then(|contents| serde_json::from_str::<StorageData>(&contents).map_err(|e| e.to_string()));

        match parsed {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded store data");
                data
            }
            Err(e) => {
                let aside = path.with_extension("corrupt");
                tracing::warn!(error = %e, moved_to = ?aside, "store file is not valid JSON, starting empty");
                if let Err(rename_err) = std::fs::rename(path, &aside) {
                    tracing::warn!(error = %rename_err, "failed to move corrupt store file aside");
                }
                StorageData::default()
            }
        }
    }

    /// Saves the in-memory data using an atomic write.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving store data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ExplorerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_read", key = %key).entered();

        let value = self.data.entries.get(key).cloned();
        tracing::debug!(found = value.is_some(), "key lookup complete");
        Ok(value)
    }

    fn write(&mut self, key: &str, raw: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_write", key = %key, len = raw.len()).entered();

        let previous = self.data.entries.insert(key.to_string(), raw.to_string());

        if let Err(e) = self.save_to_file() {
            // Keep memory in step with the file that is actually on disk.
            match previous {
                Some(old) => self.data.entries.insert(key.to_string(), old),
                None => self.data.entries.remove(key),
            };
            return Err(ExplorerError::Storage(format!("failed to persist {key}: {e}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let mut store = JsonFileStore::new(path.clone()).expect("open store");
        assert_eq!(store.read("k").expect("read"), None);
        store.write("k", "[\"a\"]").expect("write");
        drop(store);

        let reopened = JsonFileStore::new(path.clone()).expect("reopen store");
        assert_eq!(reopened.read("k").expect("read").as_deref(), Some("[\"a\"]"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_moved_aside() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").expect("seed corrupt file");

        let store = JsonFileStore::new(path.clone()).expect("open store");
        assert_eq!(store.read("spacex-favorites").expect("read"), None);
        assert!(path.with_extension("corrupt").exists());
    }

    #[test]
    fn non_utf8_file_is_moved_aside() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, [0xff, 0xfe, b'[', b']']).expect("seed binary file");

        let store = JsonFileStore::new(path.clone()).expect("open store");
        assert_eq!(store.read("spacex-favorites").expect("read"), None);
        assert!(path.with_extension("corrupt").exists());
    }

    #[test]
    fn unreadable_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory at the store path cannot be read as a file.
        let path = dir.path().join("storage.json");
        std::fs::create_dir(&path).expect("block store path");

        let store = JsonFileStore::new(path).expect("open store");
        assert_eq!(store.read("spacex-favorites").expect("read"), None);
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        let mut store = JsonFileStore::new(path).expect("open store");
        store.write("k", "old").expect("first write");

        // A directory where the temp file should go makes the write fail.
        std::fs::create_dir(store.path().with_extension("tmp")).expect("block tmp path");

        assert!(store.write("k", "new").is_err());
        assert_eq!(store.read("k").expect("read").as_deref(), Some("old"));
    }
}
