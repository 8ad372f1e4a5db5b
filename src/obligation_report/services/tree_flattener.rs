use crate::obligation_report::domain::{Project, ProjectId, ProjectNode};
use crate::shared::error::ObligationError;
use crate::shared::Result;
use std::collections::HashSet;

/// ProjectTreeFlattener service for turning a linked-project tree into a flat list
///
/// Walks the tree depth-first in pre-order with an explicit stack, so a
/// deep server response cannot overflow the call stack.
///
/// - A project that appears again below itself is a cycle and fails with
///   [`ObligationError::MalformedTree`].
/// - A project reached a second time through another branch is the same
///   project; only the first occurrence (and its subtree) is kept.
/// - Projects without an id are kept; they are simply never fetched.
pub struct ProjectTreeFlattener;

impl ProjectTreeFlattener {
    /// Flattens the root project followed by its linked-project subtree
    ///
    /// # Returns
    /// All reachable projects, root at index 0, in pre-order
    pub fn flatten(root: Project, linked_projects: Vec<ProjectNode>) -> Result<Vec<Project>> {
        Self::flatten_tree(ProjectNode::with_implied_links(root, linked_projects))
    }

    /// Flattens an already assembled tree
    pub fn flatten_tree(root: ProjectNode) -> Result<Vec<Project>> {
        let mut flat = Vec::new();
        let mut visited: HashSet<ProjectId> = HashSet::new();
        // ids on the path from the root to the node being visited
        let mut ancestors: Vec<Option<ProjectId>> = Vec::new();
        let mut stack: Vec<(ProjectNode, usize)> = vec![(root, 0)];

        while let Some((node, depth)) = stack.pop() {
            ancestors.truncate(depth);
            let (project, children) = node.into_parts();

            if let Some(id) = project.id() {
                if ancestors.iter().flatten().any(|ancestor| ancestor == id) {
                    return Err(ObligationError::MalformedTree {
                        project_id: id.to_string(),
                    }
                    .into());
                }

                if !visited.insert(id.clone()) {
                    log::debug!(
                        "Project '{}' is linked more than once; keeping its first occurrence",
                        id
                    );
                    continue;
                }
            }

            ancestors.push(project.id().cloned());
            flat.push(project);

            for child in children.into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        Ok(flat)
    }
}
