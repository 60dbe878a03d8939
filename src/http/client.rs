//! HTTP client for release metadata and asset downloads.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::io::Write;

use super::error::check_status;
use crate::progress::{ProgressReporter, display_bytes};

/// Thin wrapper around reqwest for the two network operations this tool
/// performs: fetching release metadata and streaming an asset download.
/// Each request is a single attempt; interrupted downloads are not resumed.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status().map_err(check_status)?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }

    /// Downloads a file from a URL, reporting progress per received chunk.
    /// Uses a writer function to allow for custom file creation (e.g., via Runtime).
    /// Returns the number of bytes written.
    #[tracing::instrument(skip(self, create_writer, progress))]
    pub async fn download_file<W, F>(
        &self,
        url: &str,
        create_writer: F,
        progress: &dyn ProgressReporter,
    ) -> Result<u64>
    where
        W: Write,
        F: Fn() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to start download request")?;

        let mut response = response.error_for_status().map_err(check_status)?;

        let mut writer = create_writer()?;

        // Zero means the server did not announce a length.
        let total_bytes = response.content_length().unwrap_or(0);
        progress.begin(total_bytes);

        // The reporter must be finished even when the stream breaks,
        // otherwise the bar is left dangling on the terminal.
        let copied = copy_chunks(&mut response, &mut writer, progress, total_bytes).await;
        progress.finish();
        let downloaded_bytes = copied?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}

async fn copy_chunks<W: Write>(
    response: &mut reqwest::Response,
    writer: &mut W,
    progress: &dyn ProgressReporter,
    total_bytes: u64,
) -> Result<u64> {
    let mut downloaded_bytes: u64 = 0;

    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read chunk from download stream")?
    {
        writer
            .write_all(&chunk)
            .context("Failed to write chunk to file")?;
        downloaded_bytes += chunk.len() as u64;
        progress.update(display_bytes(downloaded_bytes, total_bytes));
    }

    Ok(downloaded_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MockProgressReporter;

    fn silent_progress() -> MockProgressReporter {
        let mut progress = MockProgressReporter::new();
        progress.expect_begin().return_const(());
        progress.expect_update().return_const(());
        progress.expect_finish().return_const(());
        progress
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct TestResponse {
            name: String,
            value: i32,
        }

        let result: TestResponse = client.get_json(&format!("{}/test", url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        let result: Result<serde_json::Value> = client.get_json(&format!("{}/test", url)).await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_download_file_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/file.txt")
            .with_status(200)
            .with_body("test content")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let bytes = client
            .download_file(
                &format!("{}/file.txt", url),
                || Ok(std::io::sink()),
                &silent_progress(),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(bytes, 12); // "test content" is 12 bytes
    }

    #[tokio::test]
    async fn test_download_file_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/file.txt")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        // Strict mock: a failed request must not touch the progress reporter.
        let progress = MockProgressReporter::new();
        let result = client
            .download_file(
                &format!("{}/file.txt", url),
                || Ok(std::io::sink()),
                &progress,
            )
            .await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_download_finishes_progress_when_writing_fails() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/file.txt")
            .with_status(200)
            .with_body("test content")
            .create_async()
            .await;

        let mut progress = MockProgressReporter::new();
        progress.expect_begin().times(1).return_const(());
        progress.expect_update().return_const(());
        // The bar must be terminated even though the transfer fails.
        progress.expect_finish().times(1).return_const(());

        let client = HttpClient::new(Client::new());
        let result = client
            .download_file(&format!("{}/file.txt", url), || Ok(FailingWriter), &progress)
            .await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to write chunk"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_download_reports_clamped_monotonic_progress() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let body = vec![0u8; 64 * 1024];
        let _mock = server
            .mock("GET", "/big.bin")
            .with_status(200)
            .with_body(&body)
            .create_async()
            .await;

        let total = body.len() as u64;
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::<u64>::new()));

        let mut progress = MockProgressReporter::new();
        progress
            .expect_begin()
            .withf(move |t| *t == total)
            .return_const(());
        let seen_clone = seen.clone();
        progress.expect_update().returning(move |bytes| {
            seen_clone.lock().unwrap().push(bytes);
        });
        progress.expect_finish().times(1).return_const(());

        let client = HttpClient::new(Client::new());
        let bytes = client
            .download_file(
                &format!("{}/big.bin", url),
                || Ok(std::io::sink()),
                &progress,
            )
            .await
            .unwrap();

        assert_eq!(bytes, total);
        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "progress went backwards");
        assert!(seen.iter().all(|&b| b <= total), "progress exceeded total");
        assert_eq!(*seen.last().unwrap(), total);
    }
}
