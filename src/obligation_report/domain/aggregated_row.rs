use super::{ObligationRecord, Project, ProjectId};
use serde::Serialize;

/// One line of the obligation report: an obligation joined with its owning project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedRow {
    pub project_id: String,
    pub project_name: String,
    pub project_version: Option<String>,
    /// Ancestor names from the report root down to the owning project
    pub project_path: String,
    #[serde(flatten)]
    pub obligation: ObligationRecord,
}

impl AggregatedRow {
    pub fn new(
        project_id: &ProjectId,
        project: &Project,
        project_path: String,
        obligation: ObligationRecord,
    ) -> Self {
        Self {
            project_id: project_id.to_string(),
            project_name: project.name().to_string(),
            project_version: project.version().map(String::from),
            project_path,
            obligation,
        }
    }

    pub fn title(&self) -> &str {
        &self.obligation.title
    }
}
