//! SpaceX launch explorer: browse, filter and favorite launches from the
//! terminal.
//!
//! The crate fetches the public SpaceX launch list, lets the user narrow it
//! down client-side (debounced text search, launch year, successful-only,
//! favorites-only), ranks it newest first, and keeps a set of favorite launch
//! ids in a small JSON key-value file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shim (main.rs)                                 │  ← clap, tokio loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, debounced search                 │
//! │  - Filtering and ranking                            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Favorites   │   │ - Fetch task  │
//! │ - Theming     │   │ - JSON file   │   │ - Channels    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//!                                     ┌───────────────────────┐
//!                                     │ Data Source (source/) │
//!                                     │ - SpaceX v4 API       │
//!                                     │ - TTL cache           │
//!                                     └───────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: state machine with event/action model
//! - [`config`]: TOML configuration
//! - [`domain`]: launches, rockets, errors
//! - [`infrastructure`]: platform paths
//! - [`observability`]: tracing setup with a rotating log file
//! - [`source`]: launch data source and the SpaceX API client
//! - [`storage`]: key-value backends and the favorites store
//! - [`ui`]: view models and ANSI rendering
//! - [`worker`]: background fetch task
//!
//! # Example
//!
//! ```
//! use spacex_explorer::storage::MemoryStore;
//! use spacex_explorer::worker::WorkerResponse;
//! use spacex_explorer::{handle_event, initialize, Config, Event};
//! use spacex_explorer::domain::Launch;
//!
//! let mut state = initialize(&Config::default(), MemoryStore::default());
//! let (_, actions) = handle_event(&mut state, &Event::Load)?;
//! assert_eq!(actions.len(), 1);
//!
//! let launches = vec![Launch::new("5eb87d46", "Starlink-5", "2022-01-06T21:49:00.000Z")];
//! handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::LaunchesLoaded { launches }))?;
//! assert_eq!(state.summary(), "Showing 1 of 1 launches");
//! # Ok::<(), spacex_explorer::ExplorerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, LoadState, ViewMode};
pub use config::Config;
pub use domain::{ExplorerError, Launch, Result, Rocket};
pub use ui::Theme;

use storage::{AnyStore, FavoritesStore, JsonFileStore, KeyValueStore, MemoryStore};

/// Opens the favorites backend: an in-memory map when `ephemeral`, otherwise
/// the JSON file under the configured data directory.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn open_store(config: &Config, ephemeral: bool) -> Result<AnyStore> {
    if ephemeral {
        tracing::debug!("using in-memory favorites");
        return Ok(AnyStore::Memory(MemoryStore::default()));
    }

    let path = infrastructure::favorites_file(&config.data_dir());
    tracing::debug!(path = %path.display(), "opening favorites file");
    Ok(AnyStore::File(JsonFileStore::new(path)?))
}

/// Resolves the configured theme: `theme_file` first, then the built-in
/// `theme` name, then the default. Failures fall back to the default with a
/// warning.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    if let Some(file) = &config.theme_file {
        return Theme::from_file(file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %file.display(), error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the initial application state over `store`.
///
/// Favorites are loaded immediately; the launch list starts empty and in the
/// loading state until an [`Event::Load`] round trip completes.
pub fn initialize<S: KeyValueStore>(config: &Config, store: S) -> AppState<S> {
    tracing::debug!("initializing launch explorer");

    let favorites = FavoritesStore::load(store);
    AppState::new(favorites, resolve_theme(config), config.search_debounce())
}
