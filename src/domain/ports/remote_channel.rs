//! Remote Channel Port
//!
//! Abstracts the secure remote copy/execute capability used to reach a
//! controller. Authentication is bound into the implementation; the
//! orchestrator only sees the two blocking primitives below.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::Target;

/// Classification of a remote operation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Target could not be reached (timeout, refused, DNS, missing transport binary)
    ConnectionFailure,
    /// Credentials rejected by the target
    AuthFailure,
    /// Remote command exited non-zero
    RemoteCommandFailure,
    /// Copy failed mid-transfer or the remote path was unwritable
    TransferFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConnectionFailure => "connection failure",
            Self::AuthFailure => "authentication failure",
            Self::RemoteCommandFailure => "remote command failure",
            Self::TransferFailure => "transfer failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by a remote channel primitive
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind}: {message}")]
pub struct ChannelError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ChannelError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Blocking remote operations against a single target
///
/// Every call runs to completion before returning. Retry and timeout
/// behaviour, if any, belongs to the implementation.
pub trait RemoteChannel: Send + Sync {
    /// Copy one or more local paths to `remote_dest` on `target`
    fn copy(
        &self,
        target: &Target,
        sources: &[PathBuf],
        remote_dest: &str,
        recursive: bool,
    ) -> Result<(), ChannelError>;

    /// Execute a shell command on `target`
    fn exec(&self, target: &Target, command: &str) -> Result<(), ChannelError>;
}

impl<T: RemoteChannel + ?Sized> RemoteChannel for &T {
    fn copy(
        &self,
        target: &Target,
        sources: &[PathBuf],
        remote_dest: &str,
        recursive: bool,
    ) -> Result<(), ChannelError> {
        (**self).copy(target, sources, remote_dest, recursive)
    }

    fn exec(&self, target: &Target, command: &str) -> Result<(), ChannelError> {
        (**self).exec(target, command)
    }
}
