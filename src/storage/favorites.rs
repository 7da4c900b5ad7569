//! Favorites store persisted through a [`KeyValueStore`].
//!
//! The set of favorited launch ids lives in memory for O(1) membership checks
//! and is written back in full, synchronously, on every toggle. The persisted
//! form is a JSON array of strings under [`FAVORITES_KEY`]; order is not
//! meaningful and duplicates collapse on load.
//!
//! Loading never fails. A missing key, a value that is not an array of
//! strings, or a backend read error all yield an empty set; losing a corrupt
//! favorites list is preferable to refusing to start.

use crate::domain::error::{ExplorerError, Result};
use crate::storage::backend::KeyValueStore;
use std::collections::HashSet;

/// Storage key holding the favorites array.
pub const FAVORITES_KEY: &str = "spacex-favorites";

/// Read-only membership query used by the launch filter.
pub trait FavoriteLookup {
    /// Returns `true` if the launch with `id` is a favorite.
    fn is_favorite(&self, id: &str) -> bool;
}

impl FavoriteLookup for HashSet<String> {
    fn is_favorite(&self, id: &str) -> bool {
        self.contains(id)
    }
}

/// Favorited launch ids backed by a persistent key-value store.
///
/// # Examples
///
/// ```
/// use spacex_explorer::storage::{FavoritesStore, MemoryStore, FAVORITES_KEY};
///
/// let mut favorites = FavoritesStore::load(MemoryStore::with_entry(FAVORITES_KEY, r#"["a","b"]"#));
/// assert!(favorites.is_favorite("a"));
/// assert_eq!(favorites.count(), 2);
///
/// assert!(!favorites.toggle("a")?);
/// assert_eq!(favorites.count(), 1);
/// # Ok::<(), spacex_explorer::ExplorerError>(())
/// ```
#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    ids: HashSet<String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Rehydrates the favorites set from `store`.
    pub fn load(store: S) -> Self {
        let _span = tracing::debug_span!("favorites_load").entered();

        let ids = match store.read(FAVORITES_KEY) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to parse persisted favorites, starting empty");
                HashSet::new()
            }),
            Ok(None) => {
                tracing::debug!("no persisted favorites");
                HashSet::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted favorites, starting empty");
                HashSet::new()
            }
        };

        tracing::debug!(count = ids.len(), "favorites loaded");
        Self { store, ids }
    }

    /// Flips membership of `id` and persists the whole set before returning.
    ///
    /// Returns the new membership: `true` if `id` is now a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Storage`] if the write fails. The toggle is
    /// undone in that case, so the in-memory set keeps matching what is stored.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("favorites_toggle", id = %id).entered();

        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        if let Err(e) = self.persist() {
            if now_favorite {
                self.ids.remove(id);
            } else {
                self.ids.insert(id.to_string());
            }
            tracing::error!(error = %e, "failed to persist favorites, toggle reverted");
            return Err(e);
        }

        tracing::debug!(now_favorite, count = self.ids.len(), "favorite toggled");
        Ok(now_favorite)
    }

    /// Returns `true` if `id` is a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of favorites.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Favorite ids in sorted order, exactly as the next write encodes them.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the underlying backend.
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.ids())
            .map_err(|e| ExplorerError::Storage(format!("failed to encode favorites: {e}")))?;
        self.store.write(FAVORITES_KEY, &raw)
    }
}

impl<S: KeyValueStore> FavoriteLookup for FavoritesStore<S> {
    fn is_favorite(&self, id: &str) -> bool {
        Self::is_favorite(self, id)
    }
}

fn decode(raw: &str) -> Result<HashSet<String>> {
    let ids: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| ExplorerError::Parse(format!("favorites are not a JSON array of strings: {e}")))?;
    Ok(ids.into_iter().collect())
}
