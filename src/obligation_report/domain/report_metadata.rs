/// ReportMetadata value object describing one generated obligation report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
    root_project_id: String,
    root_project_name: String,
    root_project_version: Option<String>,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
        root_project_id: String,
        root_project_name: String,
        root_project_version: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            serial_number,
            root_project_id,
            root_project_name,
            root_project_version,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn root_project_id(&self) -> &str {
        &self.root_project_id
    }

    pub fn root_project_name(&self) -> &str {
        &self.root_project_name
    }

    pub fn root_project_version(&self) -> Option<&str> {
        self.root_project_version.as_deref()
    }
}
