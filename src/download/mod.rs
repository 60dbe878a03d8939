use crate::http::HttpClient;
use crate::progress::ProgressReporter;
use crate::runtime::Runtime;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Downloads a file from a URL to the given path, streaming chunks through
/// a Runtime-created writer and reporting progress as they arrive.
#[tracing::instrument(skip(runtime, dest_path, http_client, progress))]
pub async fn download_file<R: Runtime>(
    runtime: &R,
    url: &str,
    dest_path: &Path,
    http_client: &HttpClient,
    progress: &dyn ProgressReporter,
) -> Result<u64> {
    info!("Downloading file from {}...", url);

    let dest_path = dest_path.to_path_buf();
    let bytes = http_client
        .download_file(
            url,
            || {
                runtime
                    .create_file(&dest_path)
                    .with_context(|| format!("Failed to create file at {:?}", dest_path))
            },
            progress,
        )
        .await?;

    info!("Download complete.");
    Ok(bytes)
}
