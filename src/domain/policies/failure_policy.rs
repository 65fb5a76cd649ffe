//! Failure Policy
//!
//! Decides what a deploy run does after one target fails.

use serde::{Deserialize, Serialize};

/// Fleet-wide continuation policy
///
/// Both variants share the same host loop; they differ only in whether a
/// failed host halts iteration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the run at the first failed host; later targets are never attempted
    #[default]
    StopOnFirstFailure,
    /// Record the failure and move on to the next target
    BestEffortContinue,
}

impl FailurePolicy {
    /// Whether iteration continues after a host failure
    pub fn continues_after_failure(&self) -> bool {
        matches!(self, Self::BestEffortContinue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StopOnFirstFailure => "stop-on-first-failure",
            Self::BestEffortContinue => "best-effort-continue",
        }
    }

    /// Parse a policy name, accepting a few short aliases
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "stop-on-first-failure" | "stop" | "abort" => Some(Self::StopOnFirstFailure),
            "best-effort-continue" | "best-effort" | "continue" => Some(Self::BestEffortContinue),
            _ => None,
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
