//! Configuration module for plc-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLC_DEPLOY_*)
//! 3. Config file (`plc-deploy.toml`, or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, ConfigWarning, ENV_PREFIX};
pub use types::{
    ArtifactsConfig, Config, DeployConfig, RemoteConfig, DEFAULT_CONFIG_FILE,
};
