//! Error types for plc-deploy
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ChannelError;

/// Result type alias for plc-deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for plc-deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Artifact bundle or target list is malformed (raised before any remote operation)
    #[error("invalid local input: {reason}")]
    LocalInputInvalid { reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A deployment step failed on a target
    #[error("{step} failed on host {target}: {source}")]
    HostFailed {
        target: String,
        step: String,
        #[source]
        source: ChannelError,
    },
}

impl DeployError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::LocalInputInvalid {
            reason: reason.into(),
        }
    }
}
