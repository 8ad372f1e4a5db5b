use crate::obligation_report::domain::{Project, ProjectId};
use std::collections::{HashMap, HashSet};

/// Separator between project names in an ancestry path
pub const PATH_SEPARATOR: &str = " -> ";

/// AncestryPathBuilder service for rendering "root -> ... -> project" paths
///
/// The child→parent index is built once, in a single pass over the flat
/// project list, and then reused for every lookup. When several projects
/// link the same child, the first one in list order is its parent. The
/// first project in the list is the tree root and never gets a parent, even
/// when a descendant links back to it.
pub struct AncestryPathBuilder<'a> {
    projects: &'a [Project],
    index_by_id: HashMap<&'a ProjectId, usize>,
    parent_of: HashMap<ProjectId, usize>,
}

impl<'a> AncestryPathBuilder<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        let mut index_by_id = HashMap::new();
        let mut parent_of = HashMap::new();
        let root_id = projects.first().and_then(Project::id);

        for (idx, project) in projects.iter().enumerate() {
            if let Some(id) = project.id() {
                index_by_id.entry(id).or_insert(idx);
            }

            for link in project.linked_projects() {
                let Some(child_id) = link.target_id() else {
                    continue;
                };
                if project.id() == Some(&child_id) || root_id == Some(&child_id) {
                    continue;
                }
                parent_of.entry(child_id).or_insert(idx);
            }
        }

        Self {
            projects,
            index_by_id,
            parent_of,
        }
    }

    /// Project names from the tree root down to `id`
    ///
    /// Empty when `id` is not in the list. Stops at the first project that
    /// has no parent, or at the first repeated project if the link data loops.
    pub fn segments_for(&self, id: &ProjectId) -> Vec<&'a str> {
        let mut segments = Vec::new();
        let mut seen: HashSet<usize> = HashSet::new();
        let mut current = self.index_by_id.get(id).copied();

        while let Some(idx) = current {
            if !seen.insert(idx) {
                break;
            }
            let project = &self.projects[idx];
            segments.push(project.name());
            current = project
                .id()
                .and_then(|project_id| self.parent_of.get(project_id))
                .copied();
        }

        segments.reverse();
        segments
    }

    /// Ancestry path joined with [`PATH_SEPARATOR`]
    pub fn path_for(&self, id: &ProjectId) -> String {
        self.segments_for(id).join(PATH_SEPARATOR)
    }

    /// The parent chosen for `id`, if any project links it
    pub fn parent_of(&self, id: &ProjectId) -> Option<&'a Project> {
        self.parent_of.get(id).map(|&idx| &self.projects[idx])
    }
}
