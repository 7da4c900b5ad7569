//! Background fetch worker.
//!
//! [`FetchWorker`] owns the [`LaunchSource`] and answers [`WorkerMessage`]s
//! one at a time. In interactive mode it runs as a tokio task fed by an
//! unbounded channel, so fetches stay in flight while the event loop keeps
//! handling input. One-shot commands call [`FetchWorker::handle_message`]
//! directly.

use crate::domain::error::{ExplorerError, Result};
use crate::source::LaunchSource;
use crate::worker::{WorkerMessage, WorkerResponse};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owner of the launch source.
#[derive(Debug)]
pub struct FetchWorker<L> {
    source: L,
}

impl<L: LaunchSource> FetchWorker<L> {
    /// Creates a worker around `source`.
    pub const fn new(source: L) -> Self {
        Self { source }
    }

    /// Underlying source.
    pub const fn source(&self) -> &L {
        &self.source
    }

    /// Performs one request and converts the outcome into a response.
    ///
    /// Never fails: source errors become the `*Failed` response variants.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        tracing::debug!(message_type = message.kind(), "worker handling message");

        match message {
            WorkerMessage::FetchLaunches { force } => {
                if force {
                    self.source.invalidate().await;
                }
                match self.source.fetch_launches().await {
                    Ok(launches) => {
                        tracing::debug!(count = launches.len(), force, "launches fetched");
                        WorkerResponse::LaunchesLoaded { launches }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "launch list unavailable");
                        WorkerResponse::LaunchesFailed { message: e.to_string() }
                    }
                }
            }
            WorkerMessage::FetchRocket { id } => match self.source.fetch_rocket(&id).await {
                Ok(rocket) => {
                    tracing::debug!(rocket_id = %id, "rocket fetched");
                    WorkerResponse::RocketLoaded { rocket }
                }
                Err(e) => {
                    tracing::warn!(rocket_id = %id, error = %e, "rocket unavailable");
                    WorkerResponse::RocketFailed { id, message: e.to_string() }
                }
            },
        }
    }
}

impl<L: LaunchSource + 'static> FetchWorker<L> {
    /// Serves requests until the request channel closes or nobody listens.
    pub async fn run(
        self,
        mut requests: mpsc::UnboundedReceiver<WorkerMessage>,
        responses: mpsc::UnboundedSender<WorkerResponse>,
    ) {
        while let Some(message) = requests.recv().await {
            let response = self.handle_message(message).await;
            if responses.send(response).is_err() {
                tracing::debug!("response receiver dropped, stopping worker");
                break;
            }
        }
        tracing::debug!("fetch worker stopped");
    }

    /// Spawns the worker on the current tokio runtime.
    #[must_use]
    pub fn spawn(self) -> WorkerHandle {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(request_rx, response_tx));

        WorkerHandle {
            requests: request_tx,
            responses: response_rx,
            task,
        }
    }
}

/// Event-loop side of a spawned [`FetchWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    requests: mpsc::UnboundedSender<WorkerMessage>,
    responses: mpsc::UnboundedReceiver<WorkerResponse>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queues a request.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Worker`] if the worker task has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.requests
            .send(message)
            .map_err(|e| ExplorerError::Worker(format!("worker stopped, dropped {}", e.0.kind())))
    }

    /// Waits for the next response. `None` once the worker has stopped.
    pub async fn recv(&mut self) -> Option<WorkerResponse> {
        self.responses.recv().await
    }

    /// Stops the worker, abandoning any in-flight request.
    pub fn shutdown(self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Launch, Rocket};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeSource {
        invalidations: AtomicUsize,
    }

    #[async_trait]
    impl LaunchSource for FakeSource {
        async fn fetch_launches(&self) -> Result<Vec<Launch>> {
            Ok(vec![Launch::new("1", "FalconSat", "2006-03-24T22:30:00.000Z")])
        }

        async fn fetch_rocket(&self, id: &str) -> Result<Rocket> {
            Err(ExplorerError::Source(format!("no rocket {id}")))
        }

        async fn invalidate(&self) {
            self.invalidations.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn forced_fetch_invalidates_first() {
        let worker = FetchWorker::new(FakeSource::default());

        let response = worker.handle_message(WorkerMessage::FetchLaunches { force: true }).await;
        assert!(matches!(response, WorkerResponse::LaunchesLoaded { ref launches } if launches.len() == 1));
        assert_eq!(worker.source().invalidations.load(Ordering::SeqCst), 1);

        worker.handle_message(WorkerMessage::FetchLaunches { force: false }).await;
        assert_eq!(worker.source().invalidations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn spawned_worker_round_trip() {
        let mut handle = FetchWorker::new(FakeSource::default()).spawn();

        handle
            .post(WorkerMessage::FetchRocket { id: "falcon1".into() })
            .expect("worker accepts request");

        let response = handle.recv().await.expect("worker responds");
        assert_eq!(
            response,
            WorkerResponse::RocketFailed {
                id: "falcon1".into(),
                message: "Data source error: no rocket falcon1".into(),
            }
        );
        handle.shutdown();
    }
}
