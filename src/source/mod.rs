//! Remote launch data.
//!
//! The core only ever sees the [`LaunchSource`] trait: a read-only, idempotent
//! collaborator that returns the full launch list or one rocket, or fails. The
//! application treats any failure as "no data available" and never retries.
//!
//! # Modules
//!
//! - `spacex`: [`SpacexClient`], the HTTP implementation
//! - `cache`: [`TtlCache`], per-session freshness for fetched records

pub mod cache;
pub mod spacex;

pub use cache::TtlCache;
pub use spacex::{SpacexClient, DEFAULT_API_BASE};

use crate::domain::error::Result;
use crate::domain::{Launch, Rocket};
use async_trait::async_trait;

/// Read-only provider of launches and rocket details.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Fetches every launch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExplorerError::Source`] when no list can be delivered.
    async fn fetch_launches(&self) -> Result<Vec<Launch>>;

    /// Fetches one rocket by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExplorerError::Source`] when the rocket cannot be delivered.
    async fn fetch_rocket(&self, id: &str) -> Result<Rocket>;

    /// Drops any cached launch list so the next fetch goes to the source.
    async fn invalidate(&self) {}
}
