//! Wiring of the production collaborators.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::env;
use std::path::PathBuf;

use crate::{
    archive::{ArchiveExtractor, Extractor},
    github::{FetchRelease, GitHub},
    http::HttpClient,
};

use super::paths::SiteLayout;

pub struct Config<G: FetchRelease, E: Extractor> {
    pub github: G,
    pub http_client: HttpClient,
    pub extractor: E,
    pub layout: SiteLayout,
}

impl Config<GitHub, ArchiveExtractor> {
    pub fn new(root: Option<PathBuf>, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = env::var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication");
        }

        let client = Client::builder()
            .user_agent("docgen-cli")
            .default_headers(headers)
            .build()?;

        let http_client = HttpClient::new(client);
        let github = GitHub::new(http_client.clone(), api_url);
        let extractor = ArchiveExtractor::new();
        let layout = SiteLayout::new(root.unwrap_or_else(|| PathBuf::from(".")));

        Ok(Self {
            github,
            http_client,
            extractor,
            layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::env;
    use std::sync::{Mutex, PoisonError};

    // Config::new reads GITHUB_TOKEN, which is process-wide state. Every
    // test that constructs a Config takes this lock so the token test
    // cannot race the others.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // when GITHUB_TOKEN is set, Config::new should use it for authentication
    #[tokio::test]
    async fn test_config_new_with_github_token() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let token = "test_token";
        unsafe {
            env::set_var("GITHUB_TOKEN", token);
        }

        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("Authorization", format!("Bearer {}", token).as_str())
            .create();

        let config = Config::new(None, None).unwrap();
        let client = config.http_client.inner();
        let _ = client.get(server.url()).send().await;

        unsafe {
            env::remove_var("GITHUB_TOKEN");
        }
        mock.assert();
    }

    #[test]
    fn test_config_defaults_layout_to_current_dir() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let config = Config::new(None, None).unwrap();
        assert_eq!(config.layout.root(), std::path::Path::new("."));
        assert_eq!(config.github.api_url(), "https://api.github.com");
    }

    #[test]
    fn test_config_honors_root_and_api_url() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let config = Config::new(
            Some(PathBuf::from("/repo")),
            Some("http://localhost:1234".to_string()),
        )
        .unwrap();
        assert_eq!(config.layout.root(), std::path::Path::new("/repo"));
        assert_eq!(config.github.api_url(), "http://localhost:1234");
    }
}
