//! Deployment Orchestrator
//!
//! Runs the deploy flow for a fleet:
//! 1. Build the plan for each target
//! 2. Execute its steps strictly in order against the remote channel
//! 3. Record the host outcome
//! 4. Continue or abort according to the failure policy
//!
//! Targets are processed one at a time. A failed step ends that host's
//! plan immediately; nothing is retried here.

use std::sync::Arc;

use crate::domain::entities::{
    ArtifactBundle, DeploymentPlan, DeploymentStep, HostOutcome, RunResult,
};
use crate::domain::ports::{ChannelError, DeployEvent, DeployEventSink, NoopEventSink, RemoteChannel};
use crate::domain::services::build_plan;
use crate::domain::value_objects::Target;

use super::options::DeployContext;

/// Deploy use case - executes plans against every target
///
/// Parameterized by its remote channel so tests can script transport
/// results without a live controller.
pub struct DeploymentOrchestrator<C>
where
    C: RemoteChannel,
{
    channel: C,
    context: DeployContext,
}

impl<C> DeploymentOrchestrator<C>
where
    C: RemoteChannel,
{
    pub fn new(channel: C, context: DeployContext) -> Self {
        Self { channel, context }
    }

    pub fn context(&self) -> &DeployContext {
        &self.context
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Plan for a single target (identical for every target in a run)
    pub fn plan(&self, bundle: &ArtifactBundle) -> DeploymentPlan {
        build_plan(bundle, &self.context.layout)
    }

    /// Deploy `bundle` to every target, in order
    pub fn run(&self, bundle: &ArtifactBundle, targets: &[Target]) -> RunResult {
        self.run_with_events(bundle, targets, Arc::new(NoopEventSink))
    }

    /// Deploy with event reporting
    ///
    /// Events drive the console progress view and the NDJSON stream.
    pub fn run_with_events(
        &self,
        bundle: &ArtifactBundle,
        targets: &[Target],
        event_sink: Arc<dyn DeployEventSink>,
    ) -> RunResult {
        let policy = self.context.policy;
        let mut result = RunResult::new(policy);

        if targets.is_empty() {
            tracing::debug!("no targets supplied; nothing to deploy");
            event_sink.on_event(DeployEvent::NoTargets);
            Self::emit_completed(&result, &event_sink);
            return result;
        }

        event_sink.on_event(DeployEvent::Started {
            target_count: targets.len(),
            step_count: self.plan(bundle).len(),
            policy,
        });

        for (index, target) in targets.iter().enumerate() {
            let plan = self.plan(bundle);
            let outcome = self.run_host(index, target, &plan, &event_sink);
            let failed = !outcome.is_success();

            event_sink.on_event(DeployEvent::HostCompleted {
                index,
                outcome: outcome.clone(),
            });
            result.push(outcome);

            if failed && !policy.continues_after_failure() {
                let remaining = targets[index + 1..].to_vec();
                if !remaining.is_empty() {
                    tracing::debug!(
                        host = %target,
                        remaining = remaining.len(),
                        "aborting run after host failure"
                    );
                    event_sink.on_event(DeployEvent::HostsNotAttempted {
                        targets: remaining.clone(),
                    });
                }
                result.set_not_attempted(remaining);
                break;
            }
        }

        Self::emit_completed(&result, &event_sink);
        result
    }

    /// Execute one host's plan, stopping at the first failed step
    fn run_host(
        &self,
        index: usize,
        target: &Target,
        plan: &DeploymentPlan,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> HostOutcome {
        let detailed = event_sink.wants_detailed_events();
        let mut pending = HostOutcome::begin(target.clone(), plan.len());

        event_sink.on_event(DeployEvent::HostStarted {
            index,
            target: target.clone(),
            step_count: plan.len(),
        });

        for (step_index, step) in plan.iter().enumerate() {
            if detailed {
                event_sink.on_event(DeployEvent::StepStarted {
                    target: target.clone(),
                    index: step_index,
                    step: step.clone(),
                });
            }

            match self.execute_step(target, step) {
                Ok(()) => {
                    pending.record_success();
                    if detailed {
                        event_sink.on_event(DeployEvent::StepSucceeded {
                            target: target.clone(),
                            index: step_index,
                            step: step.clone(),
                        });
                    }
                }
                Err(error) => {
                    tracing::debug!(
                        host = %target,
                        step = %step,
                        kind = %error.kind,
                        "step failed"
                    );
                    event_sink.on_event(DeployEvent::StepFailed {
                        target: target.clone(),
                        index: step_index,
                        step: step.clone(),
                        error: error.clone(),
                    });
                    pending.record_failure(step_index, step.clone(), error);
                    break;
                }
            }
        }

        pending.finish()
    }

    /// Dispatch a step to the matching channel primitive
    fn execute_step(&self, target: &Target, step: &DeploymentStep) -> Result<(), ChannelError> {
        tracing::debug!(host = %target, action = step.action(), remote = step.remote(), "dispatching step");

        match step {
            DeploymentStep::CopyFile { local, remote, .. } => {
                self.channel
                    .copy(target, std::slice::from_ref(local), remote, false)
            }
            DeploymentStep::CopyTree { local, remote, .. } => {
                self.channel
                    .copy(target, std::slice::from_ref(local), remote, true)
            }
            DeploymentStep::EnsureRemoteDir { remote, .. } => self
                .channel
                .exec(target, &format!("mkdir -p {}", shell_quote(remote))),
        }
    }

    fn emit_completed(result: &RunResult, event_sink: &Arc<dyn DeployEventSink>) {
        event_sink.on_event(DeployEvent::Completed {
            succeeded: result.succeeded().count(),
            failed: result.failed().count(),
            not_attempted: result.not_attempted().len(),
        });
    }
}

/// Quote a path for a POSIX remote shell
pub(crate) fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
