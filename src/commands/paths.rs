//! Fixed locations of the documentation site, relative to a project root.

use std::path::{Path, PathBuf};

/// Directory layout of the documentation site under the project root.
/// All paths are fixed relative locations; only the root varies.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Documentation` - home of the generated site sources.
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("Documentation")
    }

    /// `<root>/Documentation/docfx.json` - the site configuration that must
    /// exist before anything else happens.
    pub fn config_path(&self) -> PathBuf {
        self.docs_dir().join("docfx.json")
    }

    /// `<root>/Documentation/Tools` - where downloaded archives land.
    pub fn tools_dir(&self) -> PathBuf {
        self.docs_dir().join("Tools")
    }

    /// `<root>/Documentation/Tools/<asset name>` - the downloaded archive.
    pub fn archive_path(&self, asset_name: &str) -> PathBuf {
        self.tools_dir().join(asset_name)
    }

    /// `<root>/Documentation/Tools/docfx` - the extracted tool.
    pub fn tool_dir(&self) -> PathBuf {
        self.tools_dir().join("docfx")
    }

    /// `<root>/Documentation/_site` - the generated site to serve.
    pub fn site_dir(&self) -> PathBuf {
        self.docs_dir().join("_site")
    }
}
