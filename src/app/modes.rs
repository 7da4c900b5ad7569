//! View and load state types for the application.
//!
//! # State Machine
//!
//! The screen shows one of two views:
//! - **List**: the filtered, ranked launch list
//! - **Detail**: one launch with its rocket, opened from the list
//!
//! Independently, the launch list is loading, loaded, or unavailable.

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Filtered launch list with a selection cursor.
    List,

    /// Details of one launch.
    Detail {
        /// Id of the launch being shown.
        launch_id: String,
    },
}

/// Progress of the launch list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight and nothing has arrived yet.
    Loading,

    /// The list is available.
    Ready,

    /// The source failed; the message is shown in place of the list.
    Failed(String),
}

impl LoadState {
    /// Error message, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready => None,
        }
    }
}
