//! Deploy Module
//!
//! Runs a validated artifact bundle against a fleet of targets.
//!
//! ## Structure
//!
//! - `options` - Immutable run context (`DeployContext`)
//! - `use_case` - The host loop (`DeploymentOrchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use plc_deploy::application::deploy::{DeployContext, DeploymentOrchestrator};
//!
//! let orchestrator = DeploymentOrchestrator::new(channel, DeployContext::new(layout));
//! let result = orchestrator.run(&bundle, &targets);
//! ```

mod options;
mod use_case;

pub use options::DeployContext;
pub use use_case::DeploymentOrchestrator;
