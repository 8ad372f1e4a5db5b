use crate::obligation_report::domain::{Project, ReportMetadata};
use chrono::Utc;
use uuid::Uuid;

/// Tool name written into report metadata
pub const TOOL_NAME: &str = "sw360-obligations";

/// ReportGenerator service for generating obligation report metadata
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates metadata with the current timestamp and a unique serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str, root: &Project) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
            root.id().map(|id| id.to_string()).unwrap_or_default(),
            root.name().to_string(),
            root.version().map(String::from),
        )
    }

    /// Generates metadata with this tool's name and compile-time version
    pub fn generate_default_metadata(root: &Project) -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"), root)
    }
}
