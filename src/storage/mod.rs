//! Storage layer for locally persisted state.
//!
//! The only thing the explorer persists is the favorites set. It goes through
//! a small key-value abstraction so the file-backed store can be swapped for an
//! in-memory one in tests.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-memory implementation
//! - `favorites`: the favorites set and its persistence contract

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use favorites::{FavoriteLookup, FavoritesStore, FAVORITES_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Backend chosen at runtime: on disk, or in memory for ephemeral sessions.
#[derive(Debug)]
pub enum AnyStore {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for AnyStore {
    fn read(&self, key: &str) -> crate::Result<Option<String>> {
        match self {
            Self::File(store) => store.read(key),
            Self::Memory(store) => store.read(key),
        }
    }

    fn write(&mut self, key: &str, raw: &str) -> crate::Result<()> {
        match self {
            Self::File(store) => store.write(key, raw),
            Self::Memory(store) => store.write(key, raw),
        }
    }
}
