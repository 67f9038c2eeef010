use crate::{EmploymentType, JobRecord, Lifecycle};

/// Static content of the empty-result and failure views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub image_url: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
}

pub const NO_JOBS_PLACEHOLDER: Placeholder = Placeholder {
    image_url: "https://assets.ccbp.in/frontend/react-js/no-jobs-img.png",
    heading: "No Jobs Found",
    description: "We could not find any jobs. Try other filters.",
};

pub const FAILURE_PLACEHOLDER: Placeholder = Placeholder {
    image_url: "https://assets.ccbp.in/frontend/react-js/failure-img.png",
    heading: "Oops! Something Went Wrong",
    description: "We cannot seem to find the page you are looking for",
};

pub const RETRY_LABEL: &str = "Retry";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewVariant {
    /// Nothing has been requested yet.
    Nothing,
    Loading,
    JobList(Vec<JobRecord>),
    NoJobs(Placeholder),
    /// Activating the retry affordance maps to `Msg::RetryClicked`.
    Failure {
        placeholder: Placeholder,
        retry_label: &'static str,
    },
}

/// Picks what to render from the lifecycle alone.
pub fn select_view(lifecycle: &Lifecycle) -> ViewVariant {
    match lifecycle {
        Lifecycle::Initial => ViewVariant::Nothing,
        Lifecycle::InProgress { .. } => ViewVariant::Loading,
        Lifecycle::Success { jobs } if jobs.is_empty() => ViewVariant::NoJobs(NO_JOBS_PLACEHOLDER),
        Lifecycle::Success { jobs } => ViewVariant::JobList(jobs.clone()),
        Lifecycle::Failure { .. } => ViewVariant::Failure {
            placeholder: FAILURE_PLACEHOLDER,
            retry_label: RETRY_LABEL,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmploymentOptionView {
    pub kind: EmploymentType,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryOptionView {
    pub minimum_package: u64,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewModel {
    pub variant: ViewVariant,
    pub employment_options: Vec<EmploymentOptionView>,
    pub salary_options: Vec<SalaryOptionView>,
    pub search_input: String,
}
