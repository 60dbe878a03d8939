//! The documentation build pipeline.
//!
//! Strictly sequential: precondition check, tool acquisition, then the
//! fixed init/metadata/build sequence, then the optional serve. Tool
//! invocations are best-effort: a failing step is logged and the pipeline
//! moves on, matching the behavior documented for the bootstrap script.

use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::path::PathBuf;

use crate::{
    archive::Extractor,
    docfx::DocfxTool,
    download::download_file,
    github::{FetchRelease, GitHubRepo},
    process::{CommandOutcome, CommandRunner, RealCommandRunner},
    progress::{BarReporter, ProgressReporter},
    runtime::Runtime,
};

use super::config::Config;

/// Whether to serve the generated site after building it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// Ask on the terminal (the default).
    Ask,
    /// Serve without asking.
    Always,
    /// Skip the prompt and the server.
    Never,
}

/// The repository the documentation tool is released from.
fn tool_repo() -> GitHubRepo {
    GitHubRepo {
        owner: "dotnet".to_string(),
        repo: "docfx".to_string(),
    }
}

const SERVE_QUESTION: &str =
    "The documentation can be served on http://localhost:8080. Do you want this to happen?";

/// Entry point used by main: wires the production collaborators and runs
/// the pipeline.
#[tracing::instrument(skip(runtime, root, api_url))]
pub async fn generate<R: Runtime + 'static>(
    runtime: R,
    root: Option<PathBuf>,
    api_url: Option<String>,
    serve_mode: ServeMode,
) -> Result<()> {
    let config = Config::new(root, api_url)?;
    run(
        runtime,
        config,
        &RealCommandRunner,
        &BarReporter::new(),
        serve_mode,
    )
    .await
}

/// Runs the pipeline against injected collaborators.
#[tracing::instrument(skip(runtime, config, runner, progress))]
pub async fn run<R, G, E, C>(
    runtime: R,
    config: Config<G, E>,
    runner: &C,
    progress: &dyn ProgressReporter,
    serve_mode: ServeMode,
) -> Result<()>
where
    R: Runtime + 'static,
    G: FetchRelease,
    E: Extractor,
    C: CommandRunner,
{
    let layout = &config.layout;

    // Precondition: the site configuration must exist before any network
    // work happens.
    let config_path = layout.config_path();
    if !runtime.exists(&config_path) {
        bail!(
            "docfx.json was not found at {:?}. Are you sure you are running \
             this from the repository root and have pulled the right files?",
            config_path
        );
    }

    println!("Downloading necessary tools...");

    let repo = tool_repo();
    let release = config.github.latest_release(&repo).await?;
    info!("Latest {} release is {}", repo, release.tag_name);

    let asset = release.primary_asset()?;

    runtime
        .create_dir_all(&layout.tools_dir())
        .with_context(|| format!("Failed to create tools directory at {:?}", layout.tools_dir()))?;

    let archive_path = layout.archive_path(&asset.name);
    download_file(
        &runtime,
        &asset.browser_download_url,
        &archive_path,
        &config.http_client,
        progress,
    )
    .await?;

    println!("Unzipping tools...");

    // Drop whatever a previous run left behind so the extraction always
    // reflects the downloaded archive.
    let tool_dir = layout.tool_dir();
    if runtime.exists(&tool_dir) {
        runtime.remove_dir_all(&tool_dir)?;
    }
    config.extractor.extract(&runtime, &archive_path, &tool_dir)?;

    let tool = DocfxTool::new(&tool_dir);

    println!("--------------------------\nInitializing framework...\n");
    log_outcome("init", tool.init(runner, &layout.docs_dir()).await?);

    println!("--------------------------\nForce building the metadata...\n");
    log_outcome("metadata", tool.metadata(runner, &config_path).await?);

    println!("--------------------------\nForce building the documentation...\n");
    log_outcome("build", tool.build(runner, &config_path).await?);

    println!("--------------------------");
    let serve = match serve_mode {
        ServeMode::Always => true,
        ServeMode::Never => false,
        ServeMode::Ask => runtime.confirm(SERVE_QUESTION)?,
    };

    if serve {
        // Blocks for as long as the server runs.
        log_outcome("serve", tool.serve(runner, &layout.site_dir()).await?);
    }

    Ok(())
}

/// A failing tool invocation is surfaced but does not stop the pipeline.
fn log_outcome(step: &str, outcome: CommandOutcome) {
    if !outcome.success {
        warn!("docfx {} {}; continuing", step, outcome);
    }
}
