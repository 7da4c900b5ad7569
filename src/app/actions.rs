//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) only mutates [`AppState`](crate::app::AppState);
//! anything that leaves the process is returned as an [`Action`] for the binary
//! to carry out.

use crate::worker::WorkerMessage;

/// Commands executed by the event loop after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a request to the fetch worker.
    PostToWorker(WorkerMessage),

    /// Leaves the interactive loop.
    Quit,
}
