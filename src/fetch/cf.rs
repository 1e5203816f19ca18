//! `cf curl` subprocess fetcher

use super::types::Fetch;
use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Configuration for the `cf curl` fetcher
#[derive(Debug, Clone)]
pub struct CfCurlConfig {
    /// Binary to invoke
    pub binary: String,
    /// Subcommand passed before the resource path
    pub subcommand: String,
}

impl Default for CfCurlConfig {
    fn default() -> Self {
        Self {
            binary: "cf".to_string(),
            subcommand: "curl".to_string(),
        }
    }
}

/// Fetcher that shells out to the Cloud Foundry CLI.
///
/// Each call runs `<binary> curl <path>` to completion and returns its
/// stdout. A spawn failure or non-zero exit is a fetch error carrying
/// whatever the child wrote to stderr.
#[derive(Debug, Clone, Default)]
pub struct CfCurl {
    config: CfCurlConfig,
}

impl CfCurl {
    /// Create a fetcher using the `cf` binary on PATH
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher with the given config
    pub fn with_config(config: CfCurlConfig) -> Self {
        Self { config }
    }

    /// Create a fetcher invoking a specific binary
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            config: CfCurlConfig {
                binary: binary.into(),
                ..CfCurlConfig::default()
            },
        }
    }

    /// The full command line for diagnostics
    fn command_line(&self, path: &str) -> String {
        format!("{} {} {}", self.config.binary, self.config.subcommand, path)
    }
}

#[async_trait]
impl Fetch for CfCurl {
    async fn fetch(&self, path: &str) -> Result<String> {
        debug!(%path, binary = %self.config.binary, "spawning fetch command");

        let output = Command::new(&self.config.binary)
            .arg(&self.config.subcommand)
            .arg(path)
            .output()
            .await
            .map_err(|e| Error::spawn(self.command_line(path), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::command_failed(
                self.command_line(path),
                output.status,
                stderr,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
