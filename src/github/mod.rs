mod client;
mod types;

pub use client::{FetchRelease, GitHub};
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockFetchRelease;

/// A GitHub repository in "owner/repo" form.
#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
