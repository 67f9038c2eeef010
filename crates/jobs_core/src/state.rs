use std::fmt;

use crate::view_model::{select_view, EmploymentOptionView, SalaryOptionView, SearchViewModel};
use crate::{EmploymentType, FilterState, JobRecord, SALARY_RANGES};

/// Sequence number of one fetch cycle. Later cycles compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CycleId(pub u64);

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a fetch cycle ended in failure. Every reason renders the same view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::HttpStatus(code) => write!(f, "http status {code}"),
            FailureReason::Timeout => write!(f, "timeout"),
            FailureReason::Network => write!(f, "network error"),
            FailureReason::MalformedBody => write!(f, "malformed response body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lifecycle {
    #[default]
    Initial,
    InProgress {
        cycle: CycleId,
    },
    Success {
        jobs: Vec<JobRecord>,
    },
    Failure {
        cycle: CycleId,
        reason: FailureReason,
    },
}

impl Lifecycle {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Lifecycle::InProgress { .. })
    }
}

/// State owned by one search component instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    filters: FilterState,
    lifecycle: Lifecycle,
    // Results of the last successful cycle while a newer cycle is pending or failed.
    last_known_jobs: Vec<JobRecord>,
    latest_cycle: CycleId,
    dirty: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// The most recently issued cycle, or `CycleId(0)` before the first fetch.
    pub fn latest_cycle(&self) -> CycleId {
        self.latest_cycle
    }

    /// Current results: the success payload, or the last successful payload
    /// while a newer cycle is in flight or has failed.
    pub fn jobs_list(&self) -> &[JobRecord] {
        match &self.lifecycle {
            Lifecycle::Success { jobs } => jobs,
            _ => &self.last_known_jobs,
        }
    }

    pub fn view(&self) -> SearchViewModel {
        let employment_options = EmploymentType::ALL
            .into_iter()
            .map(|kind| EmploymentOptionView {
                kind,
                label: kind.label(),
                checked: self.filters.employment_types().contains(&kind),
            })
            .collect();
        let salary_options = SALARY_RANGES
            .iter()
            .map(|range| SalaryOptionView {
                minimum_package: range.minimum_package,
                label: range.label,
                selected: self.filters.minimum_salary() == range.minimum_package,
            })
            .collect();

        SearchViewModel {
            variant: select_view(&self.lifecycle),
            employment_options,
            salary_options,
            search_input: self.filters.search_term().to_string(),
        }
    }

    /// Returns and clears the dirty flag: whether anything visible changed
    /// since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Enters `InProgress` under a fresh cycle id, superseding any pending cycle.
    pub(crate) fn begin_cycle(&mut self) -> CycleId {
        self.latest_cycle = CycleId(self.latest_cycle.0 + 1);
        let previous = std::mem::replace(
            &mut self.lifecycle,
            Lifecycle::InProgress {
                cycle: self.latest_cycle,
            },
        );
        if let Lifecycle::Success { jobs } = previous {
            self.last_known_jobs = jobs;
        }
        self.dirty = true;
        self.latest_cycle
    }

    /// Only the latest issued cycle may settle the lifecycle.
    pub(crate) fn is_current(&self, cycle: CycleId) -> bool {
        cycle == self.latest_cycle && self.lifecycle.is_in_progress()
    }

    pub(crate) fn complete_success(&mut self, jobs: Vec<JobRecord>) {
        self.last_known_jobs.clear();
        self.lifecycle = Lifecycle::Success { jobs };
        self.dirty = true;
    }

    pub(crate) fn complete_failure(&mut self, cycle: CycleId, reason: FailureReason) {
        self.lifecycle = Lifecycle::Failure { cycle, reason };
        self.dirty = true;
    }
}
