//! Driving the extracted DocFX executable.
//!
//! Argument lists mirror the documented bootstrap sequence: a quiet init
//! into the documentation directory, then metadata and build against the
//! site configuration with a force rebuild, and finally an optional serve
//! of the generated site.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::process::{CommandOutcome, CommandRunner};

/// File name of the tool executable inside the extracted release.
#[cfg(windows)]
pub const TOOL_EXECUTABLE: &str = "docfx.exe";
#[cfg(not(windows))]
pub const TOOL_EXECUTABLE: &str = "docfx";

/// Handle to the extracted DocFX installation.
pub struct DocfxTool {
    exe: PathBuf,
}

impl DocfxTool {
    /// Points at the executable inside the extraction directory.
    pub fn new(tool_dir: &Path) -> Self {
        Self {
            exe: tool_dir.join(TOOL_EXECUTABLE),
        }
    }

    /// `docfx init -q -o <docs_dir>`
    #[tracing::instrument(skip(self, runner))]
    pub async fn init<C: CommandRunner>(
        &self,
        runner: &C,
        docs_dir: &Path,
    ) -> Result<CommandOutcome> {
        let args = vec![
            "init".to_string(),
            "-q".to_string(),
            "-o".to_string(),
            docs_dir.display().to_string(),
        ];
        runner.run(&self.exe, &args).await
    }

    /// `docfx metadata <config> -f`
    #[tracing::instrument(skip(self, runner))]
    pub async fn metadata<C: CommandRunner>(
        &self,
        runner: &C,
        config: &Path,
    ) -> Result<CommandOutcome> {
        let args = vec![
            "metadata".to_string(),
            config.display().to_string(),
            "-f".to_string(),
        ];
        runner.run(&self.exe, &args).await
    }

    /// `docfx build <config> -f`
    #[tracing::instrument(skip(self, runner))]
    pub async fn build<C: CommandRunner>(
        &self,
        runner: &C,
        config: &Path,
    ) -> Result<CommandOutcome> {
        let args = vec![
            "build".to_string(),
            config.display().to_string(),
            "-f".to_string(),
        ];
        runner.run(&self.exe, &args).await
    }

    /// `docfx serve <site_dir>`, blocking until the server is terminated.
    #[tracing::instrument(skip(self, runner))]
    pub async fn serve<C: CommandRunner>(
        &self,
        runner: &C,
        site_dir: &Path,
    ) -> Result<CommandOutcome> {
        let args = vec!["serve".to_string(), site_dir.display().to_string()];
        runner.run(&self.exe, &args).await
    }
}
