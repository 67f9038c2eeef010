use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobs_core::{CycleId, RequestDescriptor};
use search_logging::{search_debug, search_error, search_trace};

use crate::fetch::{fetch_jobs, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineError, EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    Fetch {
        cycle: CycleId,
        request: RequestDescriptor,
    },
}

/// Runs fetches on a background tokio runtime and hands completions back over
/// a channel. Requests are never cancelled; each one reports exactly once.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("jobs-engine")
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(supervise(fetcher, command, event_tx));
            }
            search_trace!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, cycle: CycleId, request: RequestDescriptor) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { cycle, request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// Runs one command in its own task so a panicking fetcher still settles the
/// cycle with a failure.
async fn supervise(
    fetcher: Arc<dyn Fetcher>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let EngineCommand::Fetch { cycle, .. } = &command;
    let cycle = *cycle;
    let event = match tokio::spawn(handle_command(fetcher, command)).await {
        Ok(event) => event,
        Err(err) => {
            search_error!("cycle {} fetch task aborted: {}", cycle, err);
            EngineEvent::FetchCompleted {
                cycle,
                result: Err(FetchError::new(
                    FailureKind::Network,
                    format!("fetch task aborted: {err}"),
                )),
            }
        }
    };
    let _ = event_tx.send(event);
}

async fn handle_command(fetcher: Arc<dyn Fetcher>, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Fetch { cycle, request } => {
            search_debug!("cycle {} GET {}", cycle, request.url.path());
            let result = fetch_jobs(fetcher.as_ref(), &request).await;
            EngineEvent::FetchCompleted { cycle, result }
        }
    }
}
