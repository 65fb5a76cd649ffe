//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Validates the artifact bundle and target list
//! - `DeploymentOrchestrator` - Runs plans against every target under a failure policy

pub mod check;
pub mod deploy;

pub use check::{CheckOptions, CheckUseCase, CheckedInputs, HostSource};
pub use deploy::{DeployContext, DeploymentOrchestrator};
