//! Deploy outcome entities
//!
//! - `HostOutcome` - what happened on one target
//! - `RunResult` - per-target outcomes for a whole run

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::DeploymentStep;
use crate::domain::policies::FailurePolicy;
use crate::domain::ports::{ChannelError, ErrorKind};
use crate::domain::value_objects::Target;
use crate::error::DeployError;

/// The step that stopped a host's plan, with the transport error unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    /// Zero-based position of the step in the host's plan
    pub index: usize,
    pub step: DeploymentStep,
    pub error: ChannelError,
}

impl StepFailure {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind
    }
}

impl std::fmt::Display for StepFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.step, self.error)
    }
}

/// Final record of one target's plan execution
///
/// Produced by `PendingOutcome::finish` and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostOutcome {
    target: Target,
    steps_planned: usize,
    steps_attempted: usize,
    steps_succeeded: usize,
    first_failure: Option<StepFailure>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl HostOutcome {
    /// Start recording a host whose plan has `steps_planned` steps
    pub fn begin(target: Target, steps_planned: usize) -> PendingOutcome {
        PendingOutcome {
            target,
            steps_planned,
            steps_attempted: 0,
            steps_succeeded: 0,
            first_failure: None,
            started_at: Utc::now(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn steps_planned(&self) -> usize {
        self.steps_planned
    }

    pub fn steps_attempted(&self) -> usize {
        self.steps_attempted
    }

    pub fn steps_succeeded(&self) -> usize {
        self.steps_succeeded
    }

    pub fn first_failure(&self) -> Option<&StepFailure> {
        self.first_failure.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.first_failure.is_none()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Convert a failed outcome into an error naming target and step
    pub fn to_error(&self) -> Option<DeployError> {
        self.first_failure
            .as_ref()
            .map(|failure| DeployError::HostFailed {
                target: self.target.to_string(),
                step: failure.step.describe(),
                source: failure.error.clone(),
            })
    }
}

/// Outcome under construction while a host's plan runs
#[derive(Debug)]
pub struct PendingOutcome {
    target: Target,
    steps_planned: usize,
    steps_attempted: usize,
    steps_succeeded: usize,
    first_failure: Option<StepFailure>,
    started_at: DateTime<Utc>,
}

impl PendingOutcome {
    pub fn record_success(&mut self) {
        self.steps_attempted += 1;
        self.steps_succeeded += 1;
    }

    pub fn record_failure(&mut self, index: usize, step: DeploymentStep, error: ChannelError) {
        self.steps_attempted += 1;
        if self.first_failure.is_none() {
            self.first_failure = Some(StepFailure { index, step, error });
        }
    }

    pub fn has_failed(&self) -> bool {
        self.first_failure.is_some()
    }

    pub fn finish(self) -> HostOutcome {
        HostOutcome {
            target: self.target,
            steps_planned: self.steps_planned,
            steps_attempted: self.steps_attempted,
            steps_succeeded: self.steps_succeeded,
            first_failure: self.first_failure,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

/// Result of a deploy run
///
/// Holds one outcome per attempted target, in target order. Targets skipped
/// after an abort are listed in `not_attempted` and have no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    policy: FailurePolicy,
    outcomes: Vec<HostOutcome>,
    not_attempted: Vec<Target>,
}

impl RunResult {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            outcomes: Vec::new(),
            not_attempted: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: HostOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_not_attempted(&mut self, targets: Vec<Target>) {
        self.not_attempted = targets;
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn outcomes(&self) -> &[HostOutcome] {
        &self.outcomes
    }

    pub fn not_attempted(&self) -> &[Target] {
        &self.not_attempted
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty() && self.not_attempted.is_empty()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &HostOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &HostOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True when every attempted target succeeded and none were skipped
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none() && self.not_attempted.is_empty()
    }

    /// The first failed target, in run order
    pub fn first_failure(&self) -> Option<&HostOutcome> {
        self.failed().next()
    }

    /// Surface the first host failure as an error
    pub fn ensure_success(&self) -> Result<(), DeployError> {
        match self.first_failure().and_then(HostOutcome::to_error) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
