use anyhow::{Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};

/// Represents a GitHub release asset
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub browser_download_url: String,
}

/// Represents a GitHub release
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
    pub published_at: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// The asset to download: always the first one listed.
    ///
    /// Releases with several platform-specific assets get a warning so a
    /// surprising pick is at least visible in the log.
    pub fn primary_asset(&self) -> Result<&ReleaseAsset> {
        let asset = self
            .assets
            .first()
            .ok_or_else(|| anyhow!("Release {} has no downloadable assets", self.tag_name))?;

        if self.assets.len() > 1 {
            warn!(
                "Release {} has {} assets; using the first one: {}",
                self.tag_name,
                self.assets.len(),
                asset.name
            );
        }

        Ok(asset)
    }
}
