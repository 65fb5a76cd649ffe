//! Deploy Context
//!
//! Immutable configuration handed to the orchestrator once, at construction.

use crate::domain::policies::FailurePolicy;
use crate::domain::value_objects::RemoteLayout;

/// Run-wide settings that never change during a deploy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployContext {
    /// Destination layout shared by every target
    pub layout: RemoteLayout,
    /// What to do after a target fails
    pub policy: FailurePolicy,
}

impl DeployContext {
    pub fn new(layout: RemoteLayout) -> Self {
        Self {
            layout,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}
