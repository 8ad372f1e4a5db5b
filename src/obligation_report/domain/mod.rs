pub mod aggregated_row;
pub mod obligation;
pub mod project;
pub mod report_metadata;

pub use aggregated_row::AggregatedRow;
pub use obligation::{ObligationRecord, ObligationSet, ObligationStatus, ReleaseRef};
pub use project::{LinkedProjectRef, Project, ProjectId, ProjectNode};
pub use report_metadata::ReportMetadata;
