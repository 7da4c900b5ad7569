//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that the favorites store
//! persists through. The shape is deliberately that of browser local storage:
//! opaque string values under string keys, read whole and overwritten whole.
//!
//! # Implementations
//!
//! - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON file on disk
//! - [`MemoryStore`](crate::storage::MemoryStore): in-process map for tests

use crate::domain::error::Result;

/// Abstraction over persistent key-value backends.
///
/// # Examples
///
/// ```
/// use spacex_explorer::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.write("spacex-favorites", r#"["a"]"#)?;
/// assert_eq!(store.read("spacex-favorites")?.as_deref(), Some(r#"["a"]"#));
/// assert_eq!(store.read("missing")?, None);
/// # Ok::<(), spacex_explorer::ExplorerError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value under `key` and makes it durable before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be completed.
    fn write(&mut self, key: &str, raw: &str) -> Result<()>;
}
