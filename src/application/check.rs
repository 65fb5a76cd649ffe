//! Check Use Case
//!
//! Validates local inputs before any remote operation:
//! - the artifact bundle (project file, app/crc pairs, optional visu)
//! - the target list (hosts file or explicit hosts)
//!
//! Both `check` and `deploy` go through here, so a deploy never touches a
//! controller with an invalid bundle.

use std::path::PathBuf;

use crate::domain::entities::{ArtifactBundle, ArtifactFingerprint};
use crate::domain::ports::{ArtifactRepository, HostRepository};
use crate::domain::value_objects::Target;
use crate::error::DeployResult;

/// Where the target list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
    /// Hosts file, one target per line
    File(PathBuf),
    /// Targets given directly (e.g. repeated `--host` flags)
    Explicit(Vec<Target>),
}

/// Inputs to validate
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub project_file: PathBuf,
    pub app_files: Vec<PathBuf>,
    pub visu_dir: Option<PathBuf>,
    pub hosts: HostSource,
    /// Compute sha256 fingerprints for every artifact
    pub fingerprint: bool,
}

/// Validated inputs, ready to hand to the orchestrator
#[derive(Debug, Clone)]
pub struct CheckedInputs {
    pub bundle: ArtifactBundle,
    pub targets: Vec<Target>,
    pub fingerprints: Vec<ArtifactFingerprint>,
}

pub struct CheckUseCase<AR, HR>
where
    AR: ArtifactRepository,
    HR: HostRepository,
{
    artifacts: AR,
    hosts: HR,
}

impl<AR, HR> CheckUseCase<AR, HR>
where
    AR: ArtifactRepository,
    HR: HostRepository,
{
    pub fn new(artifacts: AR, hosts: HR) -> Self {
        Self { artifacts, hosts }
    }

    pub fn execute(&self, options: &CheckOptions) -> DeployResult<CheckedInputs> {
        let bundle = self.artifacts.load_bundle(
            &options.project_file,
            &options.app_files,
            options.visu_dir.as_deref(),
        )?;

        let targets = match &options.hosts {
            HostSource::File(path) => self.hosts.load_hosts(path)?,
            HostSource::Explicit(targets) => targets.clone(),
        };

        let fingerprints = if options.fingerprint {
            self.artifacts.fingerprint(&bundle)?
        } else {
            Vec::new()
        };

        tracing::debug!(
            files = bundle.files().len(),
            visu = bundle.visu().is_some(),
            targets = targets.len(),
            "local inputs validated"
        );

        Ok(CheckedInputs {
            bundle,
            targets,
            fingerprints,
        })
    }
}
