use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::GitHubRepo;
use super::types::Release;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchRelease: Send + Sync {
    /// Fetch the latest published release of the given repository.
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release>;

    fn api_url(&self) -> &str;
}

pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "https://api.github.com".to_string());
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait]
impl FetchRelease for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        self.http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch the latest release of {}", repo))
    }

    #[tracing::instrument(skip(self))]
    fn api_url(&self) -> &str {
        &self.api_url
    }
}
