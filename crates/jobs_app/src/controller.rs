use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use jobs_core::{
    update, EmploymentType, JobRecord, JobsEndpoint, Msg, SearchState, SearchViewModel,
};
use jobs_engine::{CredentialAccessor, EngineHandle};
use search_logging::search_debug;

use crate::effects::EffectRunner;
use crate::SearchConfig;

/// The search component as seen by a surrounding UI.
///
/// All methods are meant to be called from a single UI thread. The `bool`
/// returned by every mutating call (`dispatch`, the filter setters, `search`,
/// `retry`, `pump`, `wait_for_update`) is the re-render signal: `true` means
/// `view()` now differs from what was last rendered.
pub struct SearchController {
    state: SearchState,
    runner: EffectRunner,
}

impl SearchController {
    pub fn new(config: &SearchConfig, credentials: Arc<dyn CredentialAccessor>) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let engine =
            EngineHandle::new(config.fetch.clone()).context("failed to start search engine")?;
        Ok(Self::with_engine(endpoint, engine, credentials))
    }

    pub fn with_engine(
        endpoint: JobsEndpoint,
        engine: EngineHandle,
        credentials: Arc<dyn CredentialAccessor>,
    ) -> Self {
        Self {
            state: SearchState::new(),
            runner: EffectRunner::new(engine, endpoint, credentials),
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        self.state.consume_dirty()
    }

    pub fn mount(&mut self) -> bool {
        self.dispatch(Msg::Mounted)
    }

    pub fn set_employment_type(&mut self, kind: EmploymentType, included: bool) -> bool {
        self.dispatch(Msg::EmploymentTypeToggled { kind, included })
    }

    pub fn set_minimum_salary(&mut self, value: u64) -> bool {
        self.dispatch(Msg::MinimumSalaryChanged(value))
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(Msg::SearchInputChanged(text.into()))
    }

    /// Search button or Enter key.
    pub fn search(&mut self) -> bool {
        self.dispatch(Msg::SearchSubmitted)
    }

    pub fn retry(&mut self) -> bool {
        self.dispatch(Msg::RetryClicked)
    }

    /// Applies every completion that has already arrived, without blocking.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(msg) = self.runner.poll() {
            changed |= self.dispatch(msg);
        }
        changed
    }

    /// Blocks until a completion changes the view or `timeout` elapses.
    /// Superseded completions are applied (and dropped) along the way.
    pub fn wait_for_update(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            let Some(msg) = self.runner.wait(remaining) else {
                return false;
            };
            if self.dispatch(msg) {
                return true;
            }
            search_debug!("ignored superseded completion");
        }
    }

    /// Waits until the latest cycle has settled. Returns `false` on timeout.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.lifecycle().is_in_progress() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !self.wait_for_update(remaining) {
                return false;
            }
        }
        true
    }

    pub fn view(&self) -> SearchViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn jobs_list(&self) -> &[JobRecord] {
        self.state.jobs_list()
    }
}
