use crate::application::dto::{ObligationReport, ReportRequest};
use crate::application::use_cases::obligation_fetcher::ObligationFetcher;
use crate::obligation_report::domain::{Project, ProjectNode};
use crate::obligation_report::services::{
    ObligationAggregator, ProjectTreeFlattener, ReportGenerator,
};
use crate::ports::outbound::{AccessToken, ProgressReporter, ProjectRepository};
use crate::shared::error::ObligationError;
use crate::shared::Result;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// GenerateObligationReportUseCase - Core use case for obligation reports
///
/// Orchestrates one report run: fetch the root project, fetch its transitive
/// linked projects, flatten the tree, fetch every project's obligations and
/// aggregate the rows that the fulfillment policy accepts.
///
/// Root and tree failures are fatal. Per-project obligation failures are not.
///
/// # Type Parameters
/// * `R` - ProjectRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateObligationReportUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> GenerateObligationReportUseCase<R, PR>
where
    R: ProjectRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateObligationReportUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Executes one report run
    ///
    /// # Arguments
    /// * `request` - Root project and fetch options
    /// * `token` - Credential used for every request of this run
    /// * `cancel` - Token that aborts the run at its next suspension point
    ///
    /// # Errors
    /// - [`ObligationError::ProjectFetchError`] if the root cannot be fetched
    /// - [`ObligationError::LinkedProjectsFetchError`] if the tree cannot be fetched
    /// - [`ObligationError::MalformedTree`] if the tree contains a cycle
    /// - [`ObligationError::Cancelled`] if `cancel` fires before the run finishes
    pub async fn execute(
        &self,
        request: &ReportRequest,
        token: &AccessToken,
        cancel: &CancellationToken,
    ) -> Result<ObligationReport> {
        // Step 1: Root project
        let root = self.fetch_root(request, token, cancel).await?;

        // Step 2: Transitive linked projects
        let linked = self.fetch_tree(request, token, cancel).await?;

        // Step 3: Flatten, root first
        let metadata = ReportGenerator::generate_default_metadata(&root);
        let projects = ProjectTreeFlattener::flatten(root, linked)?;
        self.progress_reporter.report(&format!(
            "🌳 Found {} project(s) in the linked-project tree",
            projects.len()
        ));

        // Step 4: Obligations of every project
        self.progress_reporter
            .report("🔍 Fetching license obligations...");
        let fetcher = ObligationFetcher::new(&self.repository, request.max_concurrent_fetches);
        let fetched = fetcher
            .fetch_all(&projects, token, cancel, |current, total| {
                self.progress_reporter
                    .report_progress(current, total, Some("projects"));
            })
            .await?;

        for failed in &fetched.summary.failed_projects {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not fetch obligations for project '{}'; its rows are missing",
                failed
            ));
        }

        // Step 5: Aggregate
        let rows =
            ObligationAggregator::aggregate(&request.project_id, &projects, &fetched.by_project);

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} obligation(s) from {}/{} project(s)",
            rows.len(),
            fetched.summary.projects_fetched,
            fetched.summary.projects_total
        ));

        Ok(ObligationReport::new(metadata, rows, fetched.summary))
    }

    async fn fetch_root(
        &self,
        request: &ReportRequest,
        token: &AccessToken,
        cancel: &CancellationToken,
    ) -> Result<Project> {
        let id = &request.project_id;
        self.progress_reporter
            .report(&format!("📖 Loading project '{}'...", id));

        let project = cancellable(cancel, self.repository.fetch_project(id, token))
            .await?
            .map_err(|e| ObligationError::ProjectFetchError {
                project_id: id.to_string(),
                details: format!("{:#}", e),
            })?;

        // The requested id is authoritative for the root
        let project = match project.id() {
            Some(_) => project,
            None => project.with_id(id.clone()),
        };

        self.progress_reporter
            .report(&format!("✅ Loaded {}", project.display_name()));
        Ok(project)
    }

    async fn fetch_tree(
        &self,
        request: &ReportRequest,
        token: &AccessToken,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProjectNode>> {
        let id = &request.project_id;
        self.progress_reporter
            .report("🔗 Resolving linked projects...");

        let linked = cancellable(cancel, self.repository.fetch_linked_projects(id, token))
            .await?
            .map_err(|e| ObligationError::LinkedProjectsFetchError {
                project_id: id.to_string(),
                details: format!("{:#}", e),
            })?;
        Ok(linked)
    }
}

/// Races `future` against `cancel`; a result that lands after cancellation is discarded
async fn cancellable<T, F>(cancel: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    let output = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ObligationError::Cancelled.into()),
        output = future => output,
    };
    if cancel.is_cancelled() {
        return Err(ObligationError::Cancelled.into());
    }
    Ok(output)
}

#[cfg(test)]
mod tests;
