//! File System Artifact Repository
//!
//! Validates the configured artifacts on disk and builds the bundle.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::entities::{ArtifactBundle, ArtifactFingerprint, VisuBundle, VisuItem};
use crate::domain::ports::ArtifactRepository;
use crate::error::{DeployError, DeployResult};

/// Extension of the checksum file paired with each binary
pub const CHECKSUM_EXTENSION: &str = "crc";

/// Artifact repository backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactRepository;

impl FsArtifactRepository {
    pub fn new() -> Self {
        Self
    }

    /// Path of the checksum file paired with `binary`
    pub fn checksum_for(binary: &Path) -> PathBuf {
        binary.with_extension(CHECKSUM_EXTENSION)
    }

    fn require_file(path: &Path, what: &str) -> DeployResult<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(DeployError::invalid_input(format!(
                "{} not found: {}",
                what,
                path.display()
            )))
        }
    }

    /// Immediate children of the visu directory, sorted by name
    ///
    /// Returns `Ok(None)` when the directory is missing or empty.
    fn load_visu(dir: &Path) -> DeployResult<Option<VisuBundle>> {
        if !dir.exists() {
            tracing::debug!(dir = %dir.display(), "no visu directory; skipping visu");
            return Ok(None);
        }
        if !dir.is_dir() {
            return Err(DeployError::invalid_input(format!(
                "visu path is not a directory: {}",
                dir.display()
            )));
        }

        let mut items = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            // Follows symlinks; a linked directory is copied as a tree
            if std::fs::metadata(&path)?.is_dir() {
                items.push(VisuItem::directory(path));
            } else {
                items.push(VisuItem::file(path));
            }
        }

        if items.is_empty() {
            tracing::debug!(dir = %dir.display(), "visu directory is empty; skipping visu");
            return Ok(None);
        }

        items.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        VisuBundle::new(dir, items).map(Some)
    }

    fn hash_file(path: &Path) -> DeployResult<ArtifactFingerprint> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }

        Ok(ArtifactFingerprint {
            path: path.to_path_buf(),
            sha256: format!("{:x}", hasher.finalize()),
            size,
        })
    }
}

impl ArtifactRepository for FsArtifactRepository {
    fn load_bundle(
        &self,
        project_file: &Path,
        app_files: &[PathBuf],
        visu_dir: Option<&Path>,
    ) -> DeployResult<ArtifactBundle> {
        Self::require_file(project_file, "project file")?;

        let mut app_crc_files = Vec::with_capacity(app_files.len() * 2);
        for binary in app_files {
            Self::require_file(binary, "binary file")?;
            let checksum = Self::checksum_for(binary);
            Self::require_file(&checksum, "checksum file")?;
            app_crc_files.push(binary.clone());
            app_crc_files.push(checksum);
        }

        let mut bundle = ArtifactBundle::new(project_file).with_app_crc_files(app_crc_files);
        if let Some(visu) = visu_dir.map(Self::load_visu).transpose()?.flatten() {
            bundle = bundle.with_visu(visu);
        }

        Ok(bundle)
    }

    fn fingerprint(&self, bundle: &ArtifactBundle) -> DeployResult<Vec<ArtifactFingerprint>> {
        bundle.files().into_iter().map(Self::hash_file).collect()
    }
}
