//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::FailurePolicy;
use crate::domain::value_objects::RemoteLayout;
use crate::error::DeployResult;
use crate::infrastructure::fs::expand_home;

use super::loader::{self, ConfigWarning};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "plc-deploy.toml";

/// Remote connection and layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Controller's application root
    #[serde(default = "default_root")]
    pub root: String,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub identity_file: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub batch_mode: bool,

    /// Seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            user: None,
            port: None,
            identity_file: None,
            batch_mode: true,
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn layout(&self) -> RemoteLayout {
        RemoteLayout::new(&self.root)
    }
}

fn default_root() -> String {
    RemoteLayout::DEFAULT_ROOT.to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

/// Local artifact locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_project_file")]
    pub project_file: PathBuf,

    /// Application binaries; each needs a sibling `.crc`
    #[serde(default)]
    pub app_files: Vec<PathBuf>,

    #[serde(default)]
    pub visu_dir: Option<PathBuf>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            project_file: default_project_file(),
            app_files: Vec::new(),
            visu_dir: None,
        }
    }
}

fn default_project_file() -> PathBuf {
    PathBuf::from("Archive.prj")
}

/// Deploy run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_hosts_file")]
    pub hosts_file: PathBuf,

    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            hosts_file: default_hosts_file(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

fn default_hosts_file() -> PathBuf {
    PathBuf::from("hosts.txt")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (PLC_DEPLOY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Make relative local paths absolute against `base`
    ///
    /// `base` is the directory holding the config file. A leading `~` on
    /// the identity file expands to the home directory.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };

        self.artifacts.project_file = resolve(&self.artifacts.project_file);
        self.artifacts.app_files = self
            .artifacts
            .app_files
            .iter()
            .map(|p| resolve(p))
            .collect();
        self.artifacts.visu_dir = self.artifacts.visu_dir.as_deref().map(resolve);
        self.deploy.hosts_file = resolve(&self.deploy.hosts_file);
        self.remote.identity_file = self
            .remote
            .identity_file
            .as_deref()
            .map(|p| resolve(&expand_home(p)));
        self
    }
}
