use crate::application::dto::{ColumnLabels, FetchSummary, ObligationReport};
use crate::obligation_report::domain::{AggregatedRow, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter rendering the report as a single Markdown table
///
/// Column headers come from [`ColumnLabels`]; cell values are escaped so a
/// pipe or line break inside server data cannot break the table.
pub struct MarkdownFormatter {
    labels: ColumnLabels,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::with_labels(ColumnLabels::default())
    }

    pub fn with_labels(labels: ColumnLabels) -> Self {
        Self { labels }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
    }

    fn render_header(&self, output: &mut String, metadata: &ReportMetadata) {
        let root = match metadata.root_project_version() {
            Some(version) if !version.is_empty() => {
                format!("{} ({})", metadata.root_project_name(), version)
            }
            _ => metadata.root_project_name().to_string(),
        };
        output.push_str(&format!("# License Obligations: {}\n\n", root));
        output.push_str(&format!(
            "Generated by {} {} on {}  \n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
        output.push_str(&format!("Serial number: `{}`\n\n", metadata.serial_number()));
    }

    fn render_table(&self, output: &mut String, rows: &[AggregatedRow]) {
        if rows.is_empty() {
            output.push_str("_No fulfilled obligations found._\n");
            return;
        }

        let labels = self.labels.in_order();
        let header: Vec<String> = labels
            .iter()
            .map(|label| Self::escape_markdown_table_cell(label))
            .collect();
        output.push_str(&format!("| {} |\n", header.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(labels.len())));

        for row in rows {
            self.render_row(output, row);
        }
    }

    fn render_row(&self, output: &mut String, row: &AggregatedRow) {
        let project = match row.project_version.as_deref() {
            Some(version) if !version.is_empty() => format!("{} ({})", row.project_name, version),
            _ => row.project_name.clone(),
        };
        let record = &row.obligation;
        let licenses = record.license_ids.join(", ");
        let releases = record
            .releases
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let cells = [
            record.title.as_str(),
            project.as_str(),
            row.project_path.as_str(),
            record.status.as_str(),
            record.obligation_type.as_str(),
            record.obligation_level.as_str(),
            licenses.as_str(),
            releases.as_str(),
            record.comment.as_str(),
        ];
        let escaped: Vec<String> = cells
            .iter()
            .map(|cell| Self::escape_markdown_table_cell(cell))
            .collect();
        output.push_str(&format!("| {} |\n", escaped.join(" | ")));
    }

    fn render_failures(&self, output: &mut String, summary: &FetchSummary) {
        if summary.failed_projects.is_empty() {
            return;
        }
        let ids: Vec<String> = summary
            .failed_projects
            .iter()
            .map(|id| format!("`{}`", id))
            .collect();
        output.push_str(&format!(
            "\n> ⚠️ Obligations of {} project(s) could not be fetched and are missing: {}\n",
            ids.len(),
            ids.join(", ")
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ObligationReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, &report.metadata);
        self.render_table(&mut output, &report.rows);
        self.render_failures(&mut output, &report.summary);
        Ok(output)
    }
}
