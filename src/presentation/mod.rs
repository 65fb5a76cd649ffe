//! Presentation Layer
//!
//! - `cli` - CLI argument parsing (via clap)
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands, TargetArgs};
pub use factory::{create_check_use_case, create_orchestrator};
