//! plc-deploy - fleet deployment for industrial controllers
//!
//! Pushes a boot project, application binaries with their checksum files,
//! and an optional visualization directory to a list of controllers over
//! ssh/scp, one target at a time, and reports per-target outcomes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::{CheckOptions, CheckUseCase, DeployContext, DeploymentOrchestrator};
pub use config::Config;
pub use domain::entities::{ArtifactBundle, DeploymentPlan, DeploymentStep, HostOutcome, RunResult};
pub use domain::policies::FailurePolicy;
pub use domain::ports::{ChannelError, ErrorKind, RemoteChannel};
pub use domain::services::build_plan;
pub use domain::value_objects::{RemoteLayout, Target};
pub use error::{DeployError, DeployResult};
