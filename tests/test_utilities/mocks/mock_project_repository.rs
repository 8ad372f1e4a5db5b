use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use sw360_obligations::obligation_report::domain::LinkedProjectRef;
use sw360_obligations::prelude::*;

/// Mock ProjectRepository serving an in-memory SW360 server
#[derive(Default, Clone)]
pub struct MockProjectRepository {
    pub projects: HashMap<String, Project>,
    pub linked: HashMap<String, Vec<ProjectNode>>,
    pub obligations: HashMap<String, ObligationSet>,
    pub failing_obligations: HashSet<String>,
    pub should_fail: bool,
    pub requested_tokens: Arc<Mutex<Vec<String>>>,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a project with version 1.0 whose links carry a CONTAINED relation
    pub fn project(id: &str, name: &str, links: &[&str]) -> Project {
        Project::new(
            Some(ProjectId::new(id.to_string()).unwrap()),
            name.to_string(),
            Some("1.0".to_string()),
            links
                .iter()
                .map(|l| LinkedProjectRef::new(l.to_string(), Some("CONTAINED".to_string())))
                .collect(),
        )
    }

    pub fn with_project(mut self, project: Project) -> Self {
        let key = project.id().map(|id| id.to_string()).unwrap_or_default();
        self.projects.insert(key, project);
        self
    }

    pub fn with_linked(mut self, root: &str, nodes: Vec<ProjectNode>) -> Self {
        self.linked.insert(root.to_string(), nodes);
        self
    }

    pub fn with_obligations(mut self, project_id: &str, entries: &[(&str, ObligationStatus)]) -> Self {
        let set = entries
            .iter()
            .map(|(title, status)| ObligationRecord::new(*title, status.clone()))
            .collect();
        self.obligations.insert(project_id.to_string(), set);
        self
    }

    pub fn with_failing_obligations(mut self, project_id: &str) -> Self {
        self.failing_obligations.insert(project_id.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_requested_tokens(&self) -> Vec<String> {
        self.requested_tokens.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn fetch_project(&self, id: &ProjectId, token: &AccessToken) -> Result<Project> {
        self.requested_tokens
            .lock()
            .unwrap()
            .push(token.header_value());
        if self.should_fail {
            anyhow::bail!("Mock SW360 server failure");
        }
        self.projects
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("SW360 API returned status code 404 Not Found"))
    }

    async fn fetch_linked_projects(
        &self,
        id: &ProjectId,
        _token: &AccessToken,
    ) -> Result<Vec<ProjectNode>> {
        Ok(self.linked.get(id.as_str()).cloned().unwrap_or_default())
    }

    async fn fetch_license_obligations(
        &self,
        id: &ProjectId,
        _token: &AccessToken,
    ) -> Result<ObligationSet> {
        if self.failing_obligations.contains(id.as_str()) {
            anyhow::bail!("SW360 API returned status code 500 Internal Server Error");
        }
        Ok(self.obligations.get(id.as_str()).cloned().unwrap_or_default())
    }
}
