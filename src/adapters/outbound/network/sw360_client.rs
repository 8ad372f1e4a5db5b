use super::hal;
use crate::obligation_report::domain::{ObligationSet, Project, ProjectId, ProjectNode};
use crate::ports::outbound::{AccessToken, ProjectRepository};
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Media type SW360 answers with
const HAL_JSON: &str = "application/hal+json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sw360Client adapter for the SW360 REST API
///
/// Implements the ProjectRepository port on top of an async reqwest client.
/// The base URL is the REST root, e.g. `https://sw360.example.org/resource/api/`.
///
/// No retries: a failed call is reported to the caller, which decides
/// whether the run survives it.
pub struct Sw360Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Sw360Client {
    /// Creates a client for the given REST root
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| anyhow::anyhow!("Invalid SW360 base URL '{}': {}", base_url, e))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Invalid SW360 base URL '{}': only http and https are supported",
                base_url
            );
        }

        // Without a trailing slash `join` would replace the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sw360-obligations/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Builds `projects/{id}[/{suffix}][?{query}]` below the base URL
    fn endpoint(&self, id: &ProjectId, suffix: Option<&str>, query: Option<&str>) -> Result<Url> {
        validate_url_component(id.as_str(), "Project id")?;

        let mut path = format!("projects/{}", urlencoding::encode(id.as_str()));
        if let Some(suffix) = suffix {
            path.push('/');
            path.push_str(suffix);
        }

        let mut url = self.base_url.join(&path)?;
        url.set_query(query);
        Ok(url)
    }

    /// Sends an authenticated GET and returns the body of a success response
    async fn get(&self, url: Url, token: &AccessToken) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, token.header_value())
            .header(ACCEPT, HAL_JSON)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }
        if !status.is_success() {
            anyhow::bail!("SW360 API returned status code {} for {}", status, url.path());
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ProjectRepository for Sw360Client {
    async fn fetch_project(&self, id: &ProjectId, token: &AccessToken) -> Result<Project> {
        let url = self.endpoint(id, None, None)?;
        let body = self.get(url, token).await?;
        hal::parse_project(&body)
    }

    async fn fetch_linked_projects(
        &self,
        id: &ProjectId,
        token: &AccessToken,
    ) -> Result<Vec<ProjectNode>> {
        let url = self.endpoint(id, Some("linkedProjects"), Some("transitive=true&expand=true"))?;
        let body = self.get(url, token).await?;
        hal::parse_linked_projects(&body)
    }

    async fn fetch_license_obligations(
        &self,
        id: &ProjectId,
        token: &AccessToken,
    ) -> Result<ObligationSet> {
        let url = self.endpoint(id, Some("licenseObligations"), None)?;
        let body = self.get(url, token).await?;
        hal::parse_obligations(&body)
    }
}
