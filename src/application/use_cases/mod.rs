/// Use cases module containing application business logic orchestration
mod generate_obligation_report;
mod obligation_fetcher;
mod report_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use generate_obligation_report::GenerateObligationReportUseCase;
pub use obligation_fetcher::{FetchedObligations, ObligationFetcher};
pub use report_session::{InertReason, ObligationReportSession, RefreshOutcome, ReportSnapshot};
