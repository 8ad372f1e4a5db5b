use crate::application::dto::ObligationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering an obligation report
///
/// The formatter owns column layout and header labels; it receives the
/// finished rows and never filters or reorders them.
pub trait ReportFormatter {
    /// Formats the report into its textual representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ObligationReport) -> Result<String>;
}
