use crate::obligation_report::domain::{ObligationSet, Project, ProjectId, ProjectNode};
use crate::ports::outbound::AccessToken;
use crate::shared::Result;
use async_trait::async_trait;

/// ProjectRepository port for reading projects and obligations from SW360
///
/// This port abstracts the remote data source. Every method is one request;
/// any non-success answer is an error for that call only, and the caller
/// decides whether it is fatal.
///
/// # Async Support
/// Implementations must be `Send + Sync` so a report run can race each call
/// against its cancellation token.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Fetches a single project (`GET projects/{id}`)
    ///
    /// # Errors
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body cannot be decoded
    async fn fetch_project(&self, id: &ProjectId, token: &AccessToken) -> Result<Project>;

    /// Fetches the transitive linked-project tree below a project
    /// (`GET projects/{id}/linkedProjects?transitive=true&expand=true`)
    ///
    /// # Returns
    /// The directly linked projects, each carrying its own nested links
    async fn fetch_linked_projects(
        &self,
        id: &ProjectId,
        token: &AccessToken,
    ) -> Result<Vec<ProjectNode>>;

    /// Fetches the license obligations of a project
    /// (`GET projects/{id}/licenseObligations`)
    ///
    /// # Returns
    /// Obligations keyed by title, in the order the server listed them
    async fn fetch_license_obligations(
        &self,
        id: &ProjectId,
        token: &AccessToken,
    ) -> Result<ObligationSet>;
}
