//! Deployment planning service
//!
//! Pure domain logic that turns an artifact bundle into the ordered remote
//! steps for one target. No I/O happens here.

use std::path::Path;

use crate::domain::entities::{ArtifactBundle, DeploymentPlan, DeploymentStep, StepRole};
use crate::domain::value_objects::RemoteLayout;

/// Build the deployment plan for one target
///
/// Order: project file, app/crc files in bundle order, then (only when the
/// bundle carries visu) the visu directory followed by one step per item.
/// The result depends only on the inputs, so every target in a run gets the
/// same plan.
pub fn build_plan(bundle: &ArtifactBundle, layout: &RemoteLayout) -> DeploymentPlan {
    let mut steps = Vec::with_capacity(plan_len(bundle));

    steps.push(DeploymentStep::CopyFile {
        role: StepRole::Project,
        local: bundle.project_file().to_path_buf(),
        remote: layout.boot_project().to_string(),
    });

    for file in bundle.app_crc_files() {
        steps.push(DeploymentStep::CopyFile {
            role: StepRole::AppCrc,
            local: file.clone(),
            remote: layout.updates_file(&file_name(file)),
        });
    }

    if let Some(visu) = bundle.visu() {
        steps.push(DeploymentStep::EnsureRemoteDir {
            role: StepRole::VisuDir,
            remote: layout.visu_dir().to_string(),
        });

        for item in visu.items() {
            let step = if item.is_dir() {
                // scp -r places the tree under the destination directory
                DeploymentStep::CopyTree {
                    role: StepRole::VisuItem,
                    local: item.path.clone(),
                    remote: layout.visu_dir().to_string(),
                }
            } else {
                DeploymentStep::CopyFile {
                    role: StepRole::VisuItem,
                    local: item.path.clone(),
                    remote: layout.visu_file(&file_name(&item.path)),
                }
            };
            steps.push(step);
        }
    }

    DeploymentPlan::new(steps)
}

/// Number of steps `build_plan` produces for a bundle
pub fn plan_len(bundle: &ArtifactBundle) -> usize {
    1 + bundle.app_crc_files().len() + bundle.visu().map_or(0, |v| 1 + v.items().len())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
