//! Deployment plan entity
//!
//! An ordered list of remote actions for a single target.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What part of the bundle a step deploys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRole {
    /// The project archive copied to the boot-project path
    Project,
    /// A binary or checksum file copied to the updates directory
    AppCrc,
    /// Creation of the remote visu directory
    VisuDir,
    /// One item from the local visu directory
    VisuItem,
}

/// A single remote action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DeploymentStep {
    CopyFile {
        role: StepRole,
        local: PathBuf,
        remote: String,
    },
    EnsureRemoteDir {
        role: StepRole,
        remote: String,
    },
    CopyTree {
        role: StepRole,
        local: PathBuf,
        remote: String,
    },
}

impl DeploymentStep {
    pub fn role(&self) -> StepRole {
        match self {
            Self::CopyFile { role, .. }
            | Self::EnsureRemoteDir { role, .. }
            | Self::CopyTree { role, .. } => *role,
        }
    }

    /// Short action name used in event streams
    pub fn action(&self) -> &'static str {
        match self {
            Self::CopyFile { .. } => "copy_file",
            Self::EnsureRemoteDir { .. } => "ensure_remote_dir",
            Self::CopyTree { .. } => "copy_tree",
        }
    }

    pub fn local(&self) -> Option<&Path> {
        match self {
            Self::CopyFile { local, .. } | Self::CopyTree { local, .. } => Some(local),
            Self::EnsureRemoteDir { .. } => None,
        }
    }

    pub fn remote(&self) -> &str {
        match self {
            Self::CopyFile { remote, .. }
            | Self::EnsureRemoteDir { remote, .. }
            | Self::CopyTree { remote, .. } => remote,
        }
    }

    pub fn is_visu(&self) -> bool {
        matches!(self.role(), StepRole::VisuDir | StepRole::VisuItem)
    }

    /// Operator-facing description, e.g. "copy of Archive.prj"
    pub fn describe(&self) -> String {
        match self {
            Self::EnsureRemoteDir {
                role: StepRole::VisuDir,
                ..
            } => "visu directory creation".to_string(),
            Self::EnsureRemoteDir { remote, .. } => format!("creation of {}", remote),
            Self::CopyFile { local, .. } => format!("copy of {}", display_name(local)),
            Self::CopyTree { local, .. } => format!("copy of directory {}", display_name(local)),
        }
    }
}

impl std::fmt::Display for DeploymentStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Ordered steps for one target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DeploymentPlan {
    steps: Vec<DeploymentStep>,
}

impl DeploymentPlan {
    pub fn new(steps: Vec<DeploymentStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[DeploymentStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeploymentStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a DeploymentPlan {
    type Item = &'a DeploymentStep;
    type IntoIter = std::slice::Iter<'a, DeploymentStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
