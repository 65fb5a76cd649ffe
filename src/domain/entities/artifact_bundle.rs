//! Artifact bundle entity
//!
//! The validated set of local files to deploy in one run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DeployError, DeployResult};

/// Kind of an item found under the visu directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisuItemKind {
    File,
    Directory,
}

/// One immediate child of the local visu directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisuItem {
    pub path: PathBuf,
    pub kind: VisuItemKind,
}

impl VisuItem {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: VisuItemKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: VisuItemKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == VisuItemKind::Directory
    }
}

/// Visualization assets; only constructible with at least one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisuBundle {
    dir: PathBuf,
    items: Vec<VisuItem>,
}

impl VisuBundle {
    pub fn new(dir: impl Into<PathBuf>, items: Vec<VisuItem>) -> DeployResult<Self> {
        let dir = dir.into();
        if items.is_empty() {
            return Err(DeployError::invalid_input(format!(
                "visu directory {} has no items",
                dir.display()
            )));
        }
        Ok(Self { dir, items })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn items(&self) -> &[VisuItem] {
        &self.items
    }
}

/// Everything deployed to each target in a run
///
/// The project file is always present. App/crc files are kept in the order
/// given (each `.app` followed by its `.crc`) so plans are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactBundle {
    project_file: PathBuf,
    app_crc_files: Vec<PathBuf>,
    visu: Option<VisuBundle>,
}

impl ArtifactBundle {
    pub fn new(project_file: impl Into<PathBuf>) -> Self {
        Self {
            project_file: project_file.into(),
            app_crc_files: Vec::new(),
            visu: None,
        }
    }

    pub fn with_app_crc_files(mut self, files: Vec<PathBuf>) -> Self {
        self.app_crc_files = files;
        self
    }

    pub fn with_visu(mut self, visu: VisuBundle) -> Self {
        self.visu = Some(visu);
        self
    }

    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    pub fn app_crc_files(&self) -> &[PathBuf] {
        &self.app_crc_files
    }

    pub fn visu(&self) -> Option<&VisuBundle> {
        self.visu.as_ref()
    }

    /// All regular files in deploy order (visu directories are not expanded)
    pub fn files(&self) -> Vec<&Path> {
        let mut files = vec![self.project_file.as_path()];
        files.extend(self.app_crc_files.iter().map(PathBuf::as_path));
        if let Some(visu) = &self.visu {
            files.extend(
                visu.items
                    .iter()
                    .filter(|item| !item.is_dir())
                    .map(|item| item.path.as_path()),
            );
        }
        files
    }
}

/// Content hash of one local artifact, recorded for the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactFingerprint {
    pub path: PathBuf,
    pub sha256: String,
    pub size: u64,
}
