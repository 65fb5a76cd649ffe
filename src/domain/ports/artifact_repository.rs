//! ArtifactRepository port - abstraction for loading the local artifact set
//!
//! The orchestrator never touches the local file system itself; it receives
//! an already-validated `ArtifactBundle` produced through this trait.

use std::path::{Path, PathBuf};

use crate::domain::entities::{ArtifactBundle, ArtifactFingerprint};
use crate::error::DeployResult;

/// Abstract repository for validating and loading deployable artifacts
pub trait ArtifactRepository {
    /// Validate the configured artifacts and build a bundle
    ///
    /// Fails with `LocalInputInvalid` when the project file or any app/crc
    /// pair is missing. A missing or empty visu directory yields a bundle
    /// without visu.
    fn load_bundle(
        &self,
        project_file: &Path,
        app_files: &[PathBuf],
        visu_dir: Option<&Path>,
    ) -> DeployResult<ArtifactBundle>;

    /// Fingerprint every file in the bundle for the audit trail
    fn fingerprint(&self, bundle: &ArtifactBundle) -> DeployResult<Vec<ArtifactFingerprint>>;
}
