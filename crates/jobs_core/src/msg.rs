#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The search component was shown for the first time.
    Mounted,
    /// User ticked or unticked an employment type checkbox.
    EmploymentTypeToggled {
        kind: crate::EmploymentType,
        included: bool,
    },
    /// User picked a salary floor (0 clears it).
    MinimumSalaryChanged(u64),
    /// User edited the search box.
    SearchInputChanged(String),
    /// Search button clicked or Enter pressed in the search box.
    SearchSubmitted,
    /// Retry button on the failure view.
    RetryClicked,
    /// Engine finished a fetch cycle.
    JobsFetched {
        cycle: crate::CycleId,
        outcome: Result<Vec<crate::JobRecord>, crate::FailureReason>,
    },
}
