use crate::shared::security::validate_url_component;
use crate::shared::Result;

/// Maximum length for project ids (security limit)
const MAX_PROJECT_ID_LENGTH: usize = 255;

/// NewType wrapper for an SW360 project id with validation
///
/// Ids end up in request paths, so anything that could escape a path
/// segment is rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: String) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Project id cannot be empty");
        }

        if id.len() > MAX_PROJECT_ID_LENGTH {
            anyhow::bail!(
                "Project id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_PROJECT_ID_LENGTH
            );
        }

        validate_url_component(&id, "Project id")?;

        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Project id contains whitespace or control characters");
        }

        Ok(Self(id))
    }

    /// Resolves a reference that is either a raw id or a resource link
    /// such as `https://host/resource/api/projects/abc123`.
    ///
    /// The trailing path segment is taken as the id. Returns `None` when
    /// nothing usable remains.
    pub fn from_reference(reference: &str) -> Option<Self> {
        let trimmed = reference.trim();
        let without_query = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or(trimmed)
            .trim_end_matches('/');
        let segment = without_query.rsplit('/').next().unwrap_or(without_query);
        Self::new(segment.to_string()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference from one project to a linked project, as the server wrote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedProjectRef {
    reference: String,
    relation: Option<String>,
}

impl LinkedProjectRef {
    pub fn new(reference: String, relation: Option<String>) -> Self {
        Self {
            reference,
            relation,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    /// The id this reference points at, matching raw ids and resource links alike
    pub fn target_id(&self) -> Option<ProjectId> {
        ProjectId::from_reference(&self.reference)
    }

    pub fn points_to(&self, id: &ProjectId) -> bool {
        self.target_id().as_ref() == Some(id)
    }
}

/// Project snapshot as fetched from the server
///
/// `id` is `None` when the server representation carried neither an `id`
/// field nor a usable self link; such projects are never fetched for obligations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: Option<ProjectId>,
    name: String,
    version: Option<String>,
    linked_projects: Vec<LinkedProjectRef>,
}

impl Project {
    pub fn new(
        id: Option<ProjectId>,
        name: String,
        version: Option<String>,
        linked_projects: Vec<LinkedProjectRef>,
    ) -> Self {
        Self {
            id,
            name,
            version,
            linked_projects,
        }
    }

    pub fn id(&self) -> Option<&ProjectId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn linked_projects(&self) -> &[LinkedProjectRef] {
        &self.linked_projects
    }

    /// Returns the project with `id` set, keeping everything else
    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.id = Some(id);
        self
    }

    /// Name and version in the "name (version)" form used by reports
    pub fn display_name(&self) -> String {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => format!("{} ({})", self.name, version),
            _ => self.name.clone(),
        }
    }
}

/// A project together with its nested linked projects
///
/// This is the shape of the transitive linked-projects response before
/// it is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    project: Project,
    children: Vec<ProjectNode>,
}

impl ProjectNode {
    pub fn new(project: Project, children: Vec<ProjectNode>) -> Self {
        Self { project, children }
    }

    /// Builds a node and makes sure the project links every child that has an id
    ///
    /// Server responses do not always repeat the nested children in the
    /// project's own link list; ancestry lookups rely on those links.
    pub fn with_implied_links(mut project: Project, children: Vec<ProjectNode>) -> Self {
        for child in &children {
            let Some(child_id) = child.project().id() else {
                continue;
            };
            if !project.linked_projects.iter().any(|l| l.points_to(child_id)) {
                project
                    .linked_projects
                    .push(LinkedProjectRef::new(child_id.to_string(), None));
            }
        }
        Self::new(project, children)
    }

    pub fn leaf(project: Project) -> Self {
        Self::new(project, Vec::new())
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn children(&self) -> &[ProjectNode] {
        &self.children
    }

    pub fn into_parts(self) -> (Project, Vec<ProjectNode>) {
        (self.project, self.children)
    }
}
