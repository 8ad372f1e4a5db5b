// Test doubles shared by the use case tests
use crate::obligation_report::domain::{
    LinkedProjectRef, ObligationRecord, ObligationSet, ObligationStatus, Project, ProjectId,
    ProjectNode,
};
use crate::ports::outbound::{
    AccessToken, NotificationSink, ProgressReporter, ProjectRepository, SessionProvider,
    SessionStatus,
};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

pub(crate) fn id(value: &str) -> ProjectId {
    ProjectId::new(value.to_string()).unwrap()
}

pub(crate) fn project(project_id: &str, name: &str, links: &[&str]) -> Project {
    Project::new(
        Some(id(project_id)),
        name.to_string(),
        Some("1.0".to_string()),
        links
            .iter()
            .map(|l| LinkedProjectRef::new(l.to_string(), Some("CONTAINED".to_string())))
            .collect(),
    )
}

pub(crate) fn set(entries: &[(&str, ObligationStatus)]) -> ObligationSet {
    entries
        .iter()
        .map(|(title, status)| ObligationRecord::new(*title, status.clone()))
        .collect()
}

/// Pauses a single obligation request until the test releases it
#[derive(Clone)]
pub(crate) struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

/// In-memory repository; clones share their call log and switches
#[derive(Clone, Default)]
pub(crate) struct MockProjectRepository {
    projects: HashMap<String, Project>,
    linked: HashMap<String, Vec<ProjectNode>>,
    obligations: HashMap<String, ObligationSet>,
    failing_obligations: HashSet<String>,
    cancel_on: Option<(String, CancellationToken)>,
    gates: Arc<Mutex<HashMap<String, Gate>>>,
    pub fail_project: Arc<AtomicBool>,
    pub fail_linked: Arc<AtomicBool>,
    calls: Arc<Mutex<Vec<String>>>,
    project_calls: Arc<AtomicUsize>,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: Project) -> Self {
        let key = project.id().map(|i| i.to_string()).unwrap_or_default();
        self.projects.insert(key, project);
        self
    }

    /// Serves `project` for `key` even when the project itself carries no id
    pub fn with_project_as(mut self, key: &str, project: Project) -> Self {
        self.projects.insert(key.to_string(), project);
        self
    }

    pub fn with_linked(mut self, root: &str, nodes: Vec<ProjectNode>) -> Self {
        self.linked.insert(root.to_string(), nodes);
        self
    }

    pub fn with_obligations(mut self, project_id: &str, obligations: ObligationSet) -> Self {
        self.obligations.insert(project_id.to_string(), obligations);
        self
    }

    pub fn with_failing_obligations(mut self, project_id: &str) -> Self {
        self.failing_obligations.insert(project_id.to_string());
        self
    }

    /// Cancels `token` while the obligation request of `project_id` is in flight
    pub fn cancelling_on_obligations(mut self, project_id: &str, token: CancellationToken) -> Self {
        self.cancel_on = Some((project_id.to_string(), token));
        self
    }

    /// Makes the next obligation request of `project_id` wait on `gate`
    pub fn arm_gate(&self, project_id: &str, gate: Gate) {
        self.gates
            .lock()
            .unwrap()
            .insert(project_id.to_string(), gate);
    }

    pub fn obligation_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn project_calls(&self) -> usize {
        self.project_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn fetch_project(&self, id: &ProjectId, _token: &AccessToken) -> Result<Project> {
        self.project_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_project.load(Ordering::SeqCst) {
            anyhow::bail!("HTTP 500 Internal Server Error");
        }
        self.projects
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("HTTP 404 Not Found"))
    }

    async fn fetch_linked_projects(
        &self,
        id: &ProjectId,
        _token: &AccessToken,
    ) -> Result<Vec<ProjectNode>> {
        if self.fail_linked.load(Ordering::SeqCst) {
            anyhow::bail!("HTTP 403 Forbidden");
        }
        Ok(self.linked.get(id.as_str()).cloned().unwrap_or_default())
    }

    async fn fetch_license_obligations(
        &self,
        id: &ProjectId,
        _token: &AccessToken,
    ) -> Result<ObligationSet> {
        self.calls.lock().unwrap().push(id.to_string());

        let gate = self.gates.lock().unwrap().remove(id.as_str());
        if let Some(gate) = gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        if let Some((target, token)) = &self.cancel_on {
            if target == id.as_str() {
                token.cancel();
            }
        }

        if self.failing_obligations.contains(id.as_str()) {
            anyhow::bail!("HTTP 500 Internal Server Error");
        }
        Ok(self.obligations.get(id.as_str()).cloned().unwrap_or_default())
    }
}

#[derive(Clone)]
pub(crate) struct MockSessionProvider {
    status: Arc<Mutex<SessionStatus>>,
    sign_in_requests: Arc<AtomicUsize>,
}

impl MockSessionProvider {
    pub fn authenticated() -> Self {
        Self::with_status(SessionStatus::Authenticated(AccessToken::bearer("token")))
    }

    pub fn with_status(status: SessionStatus) -> Self {
        Self {
            status: Arc::new(Mutex::new(status)),
            sign_in_requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_status(&self, status: SessionStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn sign_in_requests(&self) -> usize {
        self.sign_in_requests.load(Ordering::SeqCst)
    }
}

impl SessionProvider for MockSessionProvider {
    fn status(&self) -> SessionStatus {
        self.status.lock().unwrap().clone()
    }

    fn request_sign_in(&self) {
        self.sign_in_requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockNotificationSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotificationSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
