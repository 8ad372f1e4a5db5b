use crate::obligation_report::domain::{AggregatedRow, ProjectId, ReportMetadata};

/// Outcome of the per-project obligation requests of one report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Projects in the flattened tree
    pub projects_total: usize,
    /// Projects whose obligations were fetched
    pub projects_fetched: usize,
    /// Projects whose obligation request failed; they contribute no rows
    pub failed_projects: Vec<ProjectId>,
    /// Projects skipped because they had no usable id
    pub projects_without_id: usize,
}

/// ObligationReport - Response DTO of the obligation report use case
///
/// Rows are final: formatters render them as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct ObligationReport {
    pub metadata: ReportMetadata,
    pub rows: Vec<AggregatedRow>,
    pub summary: FetchSummary,
}

impl ObligationReport {
    pub fn new(metadata: ReportMetadata, rows: Vec<AggregatedRow>, summary: FetchSummary) -> Self {
        Self {
            metadata,
            rows,
            summary,
        }
    }
}
