//! Transport error classification
//!
//! Maps ssh/scp exit status and stderr onto the channel error taxonomy.

use crate::domain::ports::{ChannelError, ErrorKind};

/// ssh reserves this exit status for its own (non-remote-command) errors
pub const SSH_ERROR_STATUS: i32 = 255;

/// Which primitive produced the failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Copy,
    Exec,
}

impl Operation {
    pub fn program(&self) -> &'static str {
        match self {
            Self::Copy => "scp",
            Self::Exec => "ssh",
        }
    }
}

const AUTH_MARKERS: &[&str] = &[
    "permission denied (",
    "permission denied, please try again",
    "host key verification failed",
    "too many authentication failures",
    "no supported authentication methods",
    "authentication failed",
];

const CONNECTION_MARKERS: &[&str] = &[
    "connection refused",
    "connection timed out",
    "operation timed out",
    "could not resolve hostname",
    "name or service not known",
    "no route to host",
    "network is unreachable",
    "connection reset",
    "connection closed by",
    "lost connection",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify a failed ssh/scp invocation
pub fn classify(operation: Operation, status: Option<i32>, stderr: &str) -> ErrorKind {
    let lower = stderr.to_lowercase();

    if contains_any(&lower, AUTH_MARKERS) {
        return ErrorKind::AuthFailure;
    }
    if contains_any(&lower, CONNECTION_MARKERS) {
        return ErrorKind::ConnectionFailure;
    }

    match operation {
        Operation::Exec if status == Some(SSH_ERROR_STATUS) => ErrorKind::ConnectionFailure,
        Operation::Exec => ErrorKind::RemoteCommandFailure,
        Operation::Copy => ErrorKind::TransferFailure,
    }
}

/// Build the channel error for a failed invocation
pub fn channel_error(operation: Operation, status: Option<i32>, stderr: &str) -> ChannelError {
    let kind = classify(operation, status, stderr);
    let message = summarize(stderr).unwrap_or_else(|| match status {
        Some(code) => format!("{} exited with status {}", operation.program(), code),
        None => format!("{} terminated by signal", operation.program()),
    });
    ChannelError::new(kind, message)
}

/// The last few meaningful stderr lines, joined
fn summarize(stderr: &str) -> Option<String> {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    let start = lines.len().saturating_sub(3);
    Some(lines[start..].join("; "))
}
