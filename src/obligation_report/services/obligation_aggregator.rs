use super::AncestryPathBuilder;
use crate::obligation_report::domain::{AggregatedRow, ObligationSet, Project, ProjectId};
use crate::obligation_report::policies::FulfillmentPolicy;
use std::collections::{HashMap, HashSet};

/// ObligationAggregator service for building the rows of an obligation report
///
/// Output order is the flat project order, then each project's obligation
/// order, so the same snapshot always yields the same rows regardless of
/// the order in which the obligations were fetched.
pub struct ObligationAggregator;

impl ObligationAggregator {
    /// Joins projects with their obligations and keeps the ones [`FulfillmentPolicy`] accepts
    ///
    /// # Arguments
    /// * `root_id` - Id of the report's root project
    /// * `projects` - Flattened project list, root first
    /// * `obligations` - Fetched obligations per project id
    pub fn aggregate(
        root_id: &ProjectId,
        projects: &[Project],
        obligations: &HashMap<ProjectId, ObligationSet>,
    ) -> Vec<AggregatedRow> {
        let ancestry = AncestryPathBuilder::new(projects);
        let root_obligations = obligations.get(root_id);
        let mut seen: HashSet<&ProjectId> = HashSet::new();
        let mut rows = Vec::new();

        for project in projects {
            let Some(project_id) = project.id() else {
                continue;
            };
            if !seen.insert(project_id) {
                continue;
            }
            let Some(project_obligations) = obligations.get(project_id) else {
                continue;
            };

            let mut path: Option<String> = None;
            for record in project_obligations.iter() {
                if !FulfillmentPolicy::is_included(record, root_obligations) {
                    continue;
                }
                let project_path = path
                    .get_or_insert_with(|| ancestry.path_for(project_id))
                    .clone();
                rows.push(AggregatedRow::new(
                    project_id,
                    project,
                    project_path,
                    record.clone(),
                ));
            }
        }

        rows
    }
}
