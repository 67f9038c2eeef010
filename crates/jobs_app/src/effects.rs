use std::sync::Arc;
use std::time::Duration;

use jobs_core::{build_request, Effect, FailureReason, JobsEndpoint, Msg};
use jobs_engine::{CredentialAccessor, EngineEvent, EngineHandle, FailureKind};
use search_logging::{describe_token, search_info, search_warn};

/// Executes core effects on the engine and turns engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
    endpoint: JobsEndpoint,
    credentials: Arc<dyn CredentialAccessor>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        endpoint: JobsEndpoint,
        credentials: Arc<dyn CredentialAccessor>,
    ) -> Self {
        Self {
            engine,
            endpoint,
            credentials,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs { cycle, filters } => {
                    let token = self.credentials.token();
                    search_info!(
                        "cycle {} fetching jobs with {} (token {})",
                        cycle,
                        filters,
                        describe_token(token.as_deref())
                    );
                    let request = build_request(&self.endpoint, &filters, token.as_deref());
                    self.engine.fetch(cycle, request);
                }
            }
        }
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { cycle, result } => {
            let outcome = match result {
                Ok(jobs) => {
                    search_info!("cycle {} returned {} jobs", cycle, jobs.len());
                    Ok(jobs)
                }
                Err(err) => {
                    search_warn!("cycle {} failed: {}", cycle, err);
                    Err(map_failure(&err.kind))
                }
            };
            Msg::JobsFetched { cycle, outcome }
        }
    }
}

fn map_failure(kind: &FailureKind) -> FailureReason {
    match kind {
        FailureKind::HttpStatus(code) => FailureReason::HttpStatus(*code),
        FailureKind::Timeout => FailureReason::Timeout,
        FailureKind::MalformedBody | FailureKind::TooLarge { .. } => FailureReason::MalformedBody,
        FailureKind::Network | FailureKind::RedirectLimitExceeded | FailureKind::InvalidRequest => {
            FailureReason::Network
        }
    }
}
