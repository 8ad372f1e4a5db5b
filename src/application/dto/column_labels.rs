use serde::Deserialize;

/// Header labels for report columns
///
/// Defaults are English; a config file can override any of them with
/// translated strings, which are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnLabels {
    pub obligation: String,
    pub project: String,
    pub path: String,
    pub status: String,
    pub obligation_type: String,
    pub obligation_level: String,
    pub licenses: String,
    pub releases: String,
    pub comment: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            obligation: "Obligation".to_string(),
            project: "Project".to_string(),
            path: "Path".to_string(),
            status: "Status".to_string(),
            obligation_type: "Type".to_string(),
            obligation_level: "Level".to_string(),
            licenses: "Licenses".to_string(),
            releases: "Releases".to_string(),
            comment: "Comment".to_string(),
        }
    }
}

impl ColumnLabels {
    /// Labels in column order
    pub fn in_order(&self) -> [&str; 9] {
        [
            &self.obligation,
            &self.project,
            &self.path,
            &self.status,
            &self.obligation_type,
            &self.obligation_level,
            &self.licenses,
            &self.releases,
            &self.comment,
        ]
    }
}
