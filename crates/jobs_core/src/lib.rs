//! Job search core: pure filter/lifecycle state machine, query builder and
//! view selection.
mod effect;
mod filter;
mod job;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{EmploymentType, FilterState, SalaryRange, SALARY_RANGES};
pub use job::JobRecord;
pub use msg::Msg;
pub use query::{
    build_request, EndpointError, JobsEndpoint, Method, RequestDescriptor, AUTHORIZATION,
};
pub use state::{CycleId, FailureReason, Lifecycle, SearchState};
pub use update::update;
pub use view_model::{
    select_view, EmploymentOptionView, Placeholder, SalaryOptionView, SearchViewModel,
    ViewVariant, FAILURE_PLACEHOLDER, NO_JOBS_PLACEHOLDER, RETRY_LABEL,
};
