//! Domain Entities
//!
//! - `ArtifactBundle` - the validated local files for one run
//! - `DeploymentPlan` - ordered remote steps for one target
//! - `HostOutcome` / `RunResult` - what a run did

mod artifact_bundle;
mod deployment_plan;
mod outcome;

pub use artifact_bundle::{ArtifactBundle, ArtifactFingerprint, VisuBundle, VisuItem, VisuItemKind};
pub use deployment_plan::{DeploymentPlan, DeploymentStep, StepRole};
pub use outcome::{HostOutcome, PendingOutcome, RunResult, StepFailure};
