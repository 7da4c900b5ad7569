//! Request and response types exchanged with the fetch worker.
//!
//! The worker is the only place that talks to the launch API. The application
//! posts a [`WorkerMessage`] and later receives the matching
//! [`WorkerResponse`] as an event. Failures travel as data so the event loop
//! can show them instead of stopping.

use crate::domain::{Launch, Rocket};

/// Requests sent to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch the full launch list.
    FetchLaunches {
        /// Bypass the cached list.
        force: bool,
    },

    /// Fetch one rocket for the detail view.
    FetchRocket {
        /// Rocket id taken from [`Launch::rocket`].
        id: String,
    },
}

impl WorkerMessage {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchLaunches { .. } => "fetch_launches",
            Self::FetchRocket { .. } => "fetch_rocket",
        }
    }
}

/// Responses sent back from the fetch worker.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// The launch list arrived.
    LaunchesLoaded {
        launches: Vec<Launch>,
    },

    /// No launch list is available.
    LaunchesFailed {
        /// Human-readable reason.
        message: String,
    },

    /// A rocket arrived.
    RocketLoaded {
        rocket: Rocket,
    },

    /// The rocket could not be fetched.
    RocketFailed {
        id: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_name_the_request() {
        assert_eq!(WorkerMessage::FetchLaunches { force: true }.kind(), "fetch_launches");
        assert_eq!(WorkerMessage::FetchRocket { id: "falcon9".into() }.kind(), "fetch_rocket");
    }
}
