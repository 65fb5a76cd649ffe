//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables progress reporting, JSON event streams, and audit trails.

use crate::domain::entities::{ArtifactFingerprint, DeploymentStep, HostOutcome};
use crate::domain::policies::FailurePolicy;
use crate::domain::ports::ChannelError;
use crate::domain::value_objects::Target;

/// Event emitted during a deploy run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Local artifacts were validated and fingerprinted
    BundleLoaded { artifacts: Vec<ArtifactFingerprint> },

    /// Run started
    Started {
        target_count: usize,
        step_count: usize,
        policy: FailurePolicy,
    },

    /// Run was given an empty target list
    NoTargets,

    /// Host plan execution started
    HostStarted {
        index: usize,
        target: Target,
        step_count: usize,
    },

    /// A step was issued to the channel
    StepStarted {
        target: Target,
        index: usize,
        step: DeploymentStep,
    },

    /// A step completed successfully
    StepSucceeded {
        target: Target,
        index: usize,
        step: DeploymentStep,
    },

    /// A step failed; the host's remaining steps are abandoned
    StepFailed {
        target: Target,
        index: usize,
        step: DeploymentStep,
        error: ChannelError,
    },

    /// Host plan finished (successfully or not)
    HostCompleted { index: usize, outcome: HostOutcome },

    /// Targets left untouched after an abort
    HostsNotAttempted { targets: Vec<Target> },

    /// Run completed
    Completed {
        succeeded: usize,
        failed: usize,
        not_attempted: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-step events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
