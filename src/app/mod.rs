//! Application layer: state, events and the actions they produce.
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Worker
//!                  ↑                                                  │
//!                  └──────────────── Worker Responses ────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects requested by the handler
//! - [`debounce`]: last-value-wins delay for search input
//! - [`filter`]: pure filtering and ranking of the launch list
//! - [`handler`]: event processing
//! - [`modes`]: view and load state types
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod debounce;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use filter::{FilterState, YearFilter};
pub use handler::{handle_event, Event};
pub use modes::{LoadState, ViewMode};
pub use state::AppState;
