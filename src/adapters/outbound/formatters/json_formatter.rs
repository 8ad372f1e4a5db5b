use crate::application::dto::ObligationReport;
use crate::obligation_report::domain::AggregatedRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    obligations: &'a [AggregatedRow],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    serial_number: &'a str,
    root_project: RootProject<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct RootProject<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    projects_total: usize,
    projects_fetched: usize,
    projects_without_id: usize,
    failed_projects: Vec<String>,
}

/// JsonFormatter adapter producing a pretty-printed JSON document
///
/// Rows are written in report order with the obligation fields flattened
/// into each row.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ObligationReport) -> Result<String> {
        let metadata = &report.metadata;
        let document = Document {
            metadata: Metadata {
                timestamp: metadata.timestamp(),
                tool: Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                },
                serial_number: metadata.serial_number(),
                root_project: RootProject {
                    id: metadata.root_project_id(),
                    name: metadata.root_project_name(),
                    version: metadata.root_project_version(),
                },
            },
            summary: Summary {
                projects_total: report.summary.projects_total,
                projects_fetched: report.summary.projects_fetched,
                projects_without_id: report.summary.projects_without_id,
                failed_projects: report
                    .summary
                    .failed_projects
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
            },
            obligations: &report.rows,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
