#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the listing request for `filters`; its completion must carry `cycle`.
    FetchJobs {
        cycle: crate::CycleId,
        filters: crate::FilterState,
    },
}
