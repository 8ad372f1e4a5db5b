use crate::application::dto::FetchSummary;
use crate::obligation_report::domain::{ObligationSet, Project, ProjectId};
use crate::ports::outbound::{AccessToken, ProjectRepository};
use crate::shared::error::ObligationError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use tokio_util::sync::CancellationToken;

/// Obligations collected for a flattened project tree
#[derive(Debug, Default)]
pub struct FetchedObligations {
    pub by_project: HashMap<ProjectId, ObligationSet>,
    pub summary: FetchSummary,
}

/// ObligationFetcher - requests the license obligations of every project in a tree
///
/// A failed request only costs that project its rows: it is logged and the
/// remaining projects are still fetched. Cancellation is checked around
/// every request and nothing is returned once the token fires.
pub struct ObligationFetcher<'a, R> {
    repository: &'a R,
    max_concurrent: usize,
}

impl<'a, R: ProjectRepository> ObligationFetcher<'a, R> {
    /// Creates a fetcher that keeps at most `max_concurrent` requests in flight
    ///
    /// With `max_concurrent == 1` requests run strictly one after another
    /// in flat-list order.
    pub fn new(repository: &'a R, max_concurrent: usize) -> Self {
        Self {
            repository,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Fetches obligations for every project that has an id
    ///
    /// # Arguments
    /// * `projects` - Flattened project list
    /// * `token` - Credential passed on every request
    /// * `cancel` - Cancellation token of the current report run
    /// * `on_progress` - Called with `(completed, total)` after each request
    ///
    /// # Errors
    /// Only [`ObligationError::Cancelled`]; per-project failures are absorbed
    pub async fn fetch_all<F>(
        &self,
        projects: &[Project],
        token: &AccessToken,
        cancel: &CancellationToken,
        on_progress: F,
    ) -> Result<FetchedObligations>
    where
        F: Fn(usize, usize),
    {
        let mut seen: HashSet<&ProjectId> = HashSet::new();
        let mut targets: Vec<&ProjectId> = Vec::new();
        let mut projects_without_id = 0;

        for project in projects {
            match project.id() {
                Some(id) => {
                    if seen.insert(id) {
                        targets.push(id);
                    }
                }
                None => {
                    log::debug!(
                        "Skipping project '{}': no resolvable id",
                        project.name()
                    );
                    projects_without_id += 1;
                }
            }
        }

        let total = targets.len();
        let repository = self.repository;
        let mut fetched = FetchedObligations {
            by_project: HashMap::with_capacity(total),
            summary: FetchSummary {
                projects_total: projects.len(),
                projects_without_id,
                ..FetchSummary::default()
            },
        };

        let requests = stream::iter(targets.into_iter().map(|id| async move {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                result = repository.fetch_license_obligations(id, token) => Some(result),
            };
            (id, outcome)
        }))
        .buffered(self.max_concurrent);
        let mut requests = std::pin::pin!(requests);

        let mut completed = 0;
        while let Some((id, outcome)) = requests.next().await {
            let Some(result) = outcome else {
                return Err(ObligationError::Cancelled.into());
            };
            if cancel.is_cancelled() {
                return Err(ObligationError::Cancelled.into());
            }

            match result {
                Ok(obligations) => {
                    log::debug!(
                        "Fetched {} obligation(s) for project '{}'",
                        obligations.len(),
                        id
                    );
                    fetched.by_project.insert(id.clone(), obligations);
                    fetched.summary.projects_fetched += 1;
                }
                Err(e) => {
                    log::warn!("Failed to fetch obligations for project '{}': {:#}", id, e);
                    fetched.summary.failed_projects.push(id.clone());
                }
            }

            completed += 1;
            on_progress(completed, total);
        }

        Ok(fetched)
    }
}
