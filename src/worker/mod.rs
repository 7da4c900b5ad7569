//! Background worker for launch API requests.
//!
//! Keeps network I/O off the event loop. The event loop posts requests and
//! receives responses as events; the worker never touches application state.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol types
//! - `handler`: the worker task and its event-loop handle

pub mod handler;
pub mod messages;

pub use handler::{FetchWorker, WorkerHandle};
pub use messages::{WorkerMessage, WorkerResponse};
