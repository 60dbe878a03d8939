use anyhow::Result;
use clap::Parser;
use docgen::commands::{ServeMode, generate};
use std::path::PathBuf;

/// docgen - Documentation site bootstrapper
///
/// Downloads the latest DocFX release from GitHub, extracts it into
/// Documentation/Tools, and runs init, metadata, and build against
/// Documentation/docfx.json. Afterwards the generated site can be served
/// on http://localhost:8080.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for avoiding API rate limits.
#[derive(Parser, Debug)]
#[command(author, version = env!("DOCGEN_VERSION"), about)]
struct Cli {
    /// Project root containing the Documentation directory (also via DOCGEN_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "DOCGEN_ROOT",
        value_name = "PATH"
    )]
    pub root: Option<PathBuf>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Serve the generated site without asking
    #[arg(long = "serve", conflicts_with = "no_serve")]
    pub serve: bool,

    /// Never serve the generated site (skips the prompt)
    #[arg(long = "no-serve")]
    pub no_serve: bool,
}

impl Cli {
    fn serve_mode(&self) -> ServeMode {
        if self.serve {
            ServeMode::Always
        } else if self.no_serve {
            ServeMode::Never
        } else {
            ServeMode::Ask
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = docgen::runtime::RealRuntime;

    let serve_mode = cli.serve_mode();
    generate(runtime, cli.root, cli.api_url, serve_mode).await
}
