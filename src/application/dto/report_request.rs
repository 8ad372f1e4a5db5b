use crate::obligation_report::domain::ProjectId;

/// Default number of obligation requests allowed in flight at once
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 1;

/// Upper bound for concurrent obligation requests
pub const MAX_CONCURRENT_FETCHES_LIMIT: usize = 16;

/// ReportRequest - Request DTO for the obligation report use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Root project of the report
    pub project_id: ProjectId,
    /// How many obligation requests may be in flight at once (1 = sequential)
    pub max_concurrent_fetches: usize,
}

impl ReportRequest {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Sets the concurrency cap, clamped to `1..=MAX_CONCURRENT_FETCHES_LIMIT`
    pub fn with_max_concurrent_fetches(mut self, max_concurrent_fetches: usize) -> Self {
        self.max_concurrent_fetches = max_concurrent_fetches.clamp(1, MAX_CONCURRENT_FETCHES_LIMIT);
        self
    }
}
