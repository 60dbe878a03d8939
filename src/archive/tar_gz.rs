use crate::runtime::Runtime;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::{debug, info};
use std::path::Path;
use tar::Archive;

use super::Extractor;

/// Extractor for .tar.gz / .tgz archives
pub struct TarGzExtractor;

impl Extractor for TarGzExtractor {
    fn can_handle(&self, archive_path: &Path) -> bool {
        let name = archive_path.to_string_lossy().to_lowercase();
        name.ends_with(".tar.gz") || name.ends_with(".tgz")
    }

    fn extract<R: Runtime + 'static>(
        &self,
        runtime: &R,
        archive_path: &Path,
        extract_to: &Path,
    ) -> Result<()> {
        debug!("Extracting tar.gz archive to {:?}...", extract_to);
        let file = runtime
            .open(archive_path)
            .with_context(|| format!("Failed to open archive at {:?}", archive_path))?;

        runtime.create_dir_all(extract_to)?;

        // tar's unpack refuses entries that would escape the target dir
        let decoder = GzDecoder::new(file);
        let mut archive = Archive::new(decoder);
        archive
            .unpack(extract_to)
            .with_context(|| format!("Failed to extract archive {:?}", archive_path))?;

        info!("Extraction complete.");
        Ok(())
    }
}
