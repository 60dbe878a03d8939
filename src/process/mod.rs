//! External process invocation.
//!
//! Commands run to completion with inherited stdio, so the invoked tool's
//! own output and prompts reach the terminal. The outcome is reported back
//! to the caller instead of being silently dropped.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::Path;
use tokio::process::Command;

/// What happened to an invoked command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, when the process exited normally.
    pub code: Option<i32>,
    /// Whether the process reported success.
    pub success: bool,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            success: true,
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            code,
            success: false,
        }
    }
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.success, self.code) {
            (true, _) => write!(f, "succeeded"),
            (false, Some(code)) => write!(f, "exited with code {}", code),
            (false, None) => write!(f, "was terminated by a signal"),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program with the given arguments, blocking until it exits.
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutcome>;
}

pub struct RealCommandRunner;

#[async_trait]
impl CommandRunner for RealCommandRunner {
    #[tracing::instrument(skip(self))]
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutcome> {
        debug!("Running {:?} with args {:?}", program, args);

        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .with_context(|| format!("Failed to run {:?}", program))?;

        if status.success() {
            Ok(CommandOutcome::success())
        } else {
            Ok(CommandOutcome::failed(status.code()))
        }
    }
}
