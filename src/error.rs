//! Error types for cfcurl
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for cfcurl
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Fetch Errors
    // ========================================================================
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("empty response from cf for '{path}'")]
    EmptyResponse { path: String },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("broken response from cf for '{path}': {source}")]
    BrokenResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a command failure error
    pub fn command_failed(
        command: impl Into<String>,
        status: std::process::ExitStatus,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status,
            stderr: stderr.into(),
        }
    }

    /// Create an empty response error
    pub fn empty_response(path: impl Into<String>) -> Self {
        Self::EmptyResponse { path: path.into() }
    }

    /// Create a broken response error
    pub fn broken_response(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::BrokenResponse {
            path: path.into(),
            source,
        }
    }

    /// Check if this error came from invoking the external tool
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::Spawn { .. } | Error::CommandFailed { .. } | Error::EmptyResponse { .. }
        )
    }

    /// Check if this error came from decoding a response body
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::BrokenResponse { .. } | Error::Json(_))
    }
}

/// Result type alias for cfcurl
pub type Result<T> = std::result::Result<T, Error>;
