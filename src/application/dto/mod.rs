/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod column_labels;
mod obligation_report;
mod output_format;
mod report_request;

pub use column_labels::ColumnLabels;
pub use obligation_report::{FetchSummary, ObligationReport};
pub use output_format::OutputFormat;
pub use report_request::{ReportRequest, DEFAULT_MAX_CONCURRENT_FETCHES, MAX_CONCURRENT_FETCHES_LIMIT};
