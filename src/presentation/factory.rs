//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{
    CheckOptions, CheckUseCase, DeployContext, DeploymentOrchestrator, HostSource,
};
use crate::config::{Config, RemoteConfig};
use crate::domain::value_objects::Target;
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::{FsArtifactRepository, FsHostRepository, SshChannel, SshOptions};

/// Type alias for the concrete check use case
pub type ConcreteCheckUseCase = CheckUseCase<FsArtifactRepository, FsHostRepository>;

/// Type alias for the orchestrator talking to real controllers
pub type SshOrchestrator = DeploymentOrchestrator<SshChannel>;

/// Connection settings for the ssh/scp channel
pub fn ssh_options(remote: &RemoteConfig) -> SshOptions {
    SshOptions {
        user: remote.user.clone(),
        port: remote.port,
        identity_file: remote.identity_file.clone(),
        batch_mode: remote.batch_mode,
        connect_timeout: Some(remote.connect_timeout).filter(|t| *t > 0),
    }
}

/// Immutable run context from the resolved configuration
pub fn deploy_context(config: &Config) -> DeployContext {
    DeployContext::new(config.remote.layout()).with_policy(config.deploy.failure_policy)
}

/// Create the orchestrator with the OpenSSH channel
pub fn create_orchestrator(config: &Config) -> SshOrchestrator {
    let channel = SshChannel::new(ssh_options(&config.remote));
    DeploymentOrchestrator::new(channel, deploy_context(config))
}

pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(FsArtifactRepository::new(), FsHostRepository::new())
}

/// Explicit `--host` values win over the hosts file
///
/// A blank `--host` is rejected here, before any controller is contacted.
pub fn host_source(hosts: &[String], hosts_file: &Path) -> DeployResult<HostSource> {
    if hosts.is_empty() {
        return Ok(HostSource::File(hosts_file.to_path_buf()));
    }

    let targets = hosts
        .iter()
        .map(|h| match h.trim() {
            "" => Err(DeployError::invalid_input("--host value is empty")),
            host => Ok(Target::new(host)),
        })
        .collect::<DeployResult<Vec<_>>>()?;
    Ok(HostSource::Explicit(targets))
}

pub fn check_options(config: &Config, hosts: HostSource, fingerprint: bool) -> CheckOptions {
    CheckOptions {
        project_file: config.artifacts.project_file.clone(),
        app_files: config.artifacts.app_files.clone(),
        visu_dir: config.artifacts.visu_dir.clone(),
        hosts,
        fingerprint,
    }
}
