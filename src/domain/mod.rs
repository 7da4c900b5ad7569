//! Domain layer for the launch explorer.
//!
//! Core types independent of the data source, storage backend or terminal.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`launch`]: Launch records, outcomes and timestamp handling
//! - [`rocket`]: Rocket detail records

pub mod error;
pub mod launch;
pub mod rocket;

pub use error::{ExplorerError, Result};
pub use launch::{FlickrLinks, Launch, LaunchLinks, LaunchOutcome, PatchLinks, RedditLinks};
pub use rocket::Rocket;
