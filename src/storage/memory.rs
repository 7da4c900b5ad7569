//! In-memory key-value backend.
//!
//! Used for tests and for `--ephemeral` sessions where favorites should not
//! outlive the process.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// Key-value store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates a store pre-seeded with one entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacex_explorer::storage::{KeyValueStore, MemoryStore};
    ///
    /// let store = MemoryStore::with_entry("spacex-favorites", "not-json");
    /// assert_eq!(store.read("spacex-favorites")?.as_deref(), Some("not-json"));
    /// # Ok::<(), spacex_explorer::ExplorerError>(())
    /// ```
    #[must_use]
    pub fn with_entry(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), raw.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, raw: &str) -> Result<()> {
        self.entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
