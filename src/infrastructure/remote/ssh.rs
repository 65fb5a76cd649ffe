//! SSH Remote Channel
//!
//! Implements `RemoteChannel` with the system OpenSSH client:
//! - `copy` runs `scp` (with `-r` for directory trees)
//! - `exec` runs `ssh <target> <command>`
//!
//! Each call is one independent process; nothing is pooled or retried.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{ChannelError, ErrorKind, RemoteChannel};
use crate::domain::value_objects::Target;

use super::classify::{channel_error, Operation};

/// Connection settings shared by every ssh/scp invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshOptions {
    /// Login user for targets given without `user@`
    pub user: Option<String>,
    pub port: Option<u16>,
    pub identity_file: Option<PathBuf>,
    /// Never prompt for passwords or host keys
    pub batch_mode: bool,
    /// Seconds before a connection attempt is abandoned
    pub connect_timeout: Option<u64>,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            user: None,
            port: None,
            identity_file: None,
            batch_mode: true,
            connect_timeout: Some(10),
        }
    }
}

impl SshOptions {
    /// `[user@]host` for a target
    ///
    /// A target that already carries a user wins over the configured one.
    pub fn destination(&self, target: &Target) -> String {
        match &self.user {
            Some(user) if !target.has_user() => format!("{}@{}", user, target),
            _ => target.to_string(),
        }
    }

    fn common_options(&self, args: &mut Vec<String>) {
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        if self.batch_mode {
            args.push("-o".to_string());
            args.push("BatchMode=yes".to_string());
        }
        if let Some(timeout) = self.connect_timeout {
            args.push("-o".to_string());
            args.push(format!("ConnectTimeout={}", timeout));
        }
    }

    /// Arguments for `scp` (program name excluded)
    pub fn scp_args(
        &self,
        target: &Target,
        sources: &[PathBuf],
        remote_dest: &str,
        recursive: bool,
    ) -> Vec<String> {
        let mut args = Vec::new();
        if recursive {
            args.push("-r".to_string());
        }
        args.push("-p".to_string());
        if let Some(port) = self.port {
            args.push("-P".to_string());
            args.push(port.to_string());
        }
        self.common_options(&mut args);
        // Sources and targets starting with '-' must not be read as options
        args.push("--".to_string());
        args.extend(sources.iter().map(|s| s.display().to_string()));
        args.push(format!("{}:{}", self.destination(target), remote_dest));
        args
    }

    /// Arguments for `ssh` (program name excluded)
    pub fn ssh_args(&self, target: &Target, command: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        self.common_options(&mut args);
        args.push("--".to_string());
        args.push(self.destination(target));
        args.push(command.to_string());
        args
    }
}

/// Remote channel backed by the OpenSSH `ssh`/`scp` binaries
#[derive(Debug, Clone, Default)]
pub struct SshChannel {
    options: SshOptions,
}

impl SshChannel {
    pub fn new(options: SshOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SshOptions {
        &self.options
    }

    fn run(&self, operation: Operation, args: Vec<String>) -> Result<(), ChannelError> {
        let program = operation.program();
        tracing::trace!(program, args = ?args, "spawning");

        let mut cmd = Command::new(program);
        cmd.args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        if self.options.batch_mode {
            cmd.stdin(Stdio::null());
        } else {
            cmd.stdin(Stdio::inherit());
        }

        let output = cmd.output().map_err(|e| {
            ChannelError::new(
                ErrorKind::ConnectionFailure,
                format!("failed to launch {}: {}", program, e),
            )
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(channel_error(operation, output.status.code(), &stderr))
    }
}

impl RemoteChannel for SshChannel {
    fn copy(
        &self,
        target: &Target,
        sources: &[PathBuf],
        remote_dest: &str,
        recursive: bool,
    ) -> Result<(), ChannelError> {
        let args = self.options.scp_args(target, sources, remote_dest, recursive);
        self.run(Operation::Copy, args)
    }

    fn exec(&self, target: &Target, command: &str) -> Result<(), ChannelError> {
        let args = self.options.ssh_args(target, command);
        self.run(Operation::Exec, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> SshOptions {
        SshOptions {
            user: Some("admin".to_string()),
            port: Some(2222),
            identity_file: Some(PathBuf::from("/keys/plc")),
            batch_mode: true,
            connect_timeout: Some(5),
        }
    }

    #[test]
    fn default_scp_args() {
        let args = SshOptions::default().scp_args(
            &Target::new("10.0.0.1"),
            &[PathBuf::from("build/Archive.prj")],
            "/opt/plc/Archive.prj",
            false,
        );
        assert_eq!(
            args,
            vec![
                "-p",
                "-o",
                "BatchMode=yes",
                "-o",
                "ConnectTimeout=10",
                "--",
                "build/Archive.prj",
                "10.0.0.1:/opt/plc/Archive.prj",
            ]
        );
    }

    #[test]
    fn recursive_scp_with_port_and_identity() {
        let args = configured().scp_args(
            &Target::new("plc-07"),
            &[PathBuf::from("visu/assets")],
            "/opt/plc/Visu",
            true,
        );
        assert_eq!(
            args,
            vec![
                "-r",
                "-p",
                "-P",
                "2222",
                "-i",
                "/keys/plc",
                "-o",
                "BatchMode=yes",
                "-o",
                "ConnectTimeout=5",
                "--",
                "visu/assets",
                "admin@plc-07:/opt/plc/Visu",
            ]
        );
    }

    #[test]
    fn ssh_args_use_lowercase_port_flag() {
        let args = configured().ssh_args(&Target::new("plc-07"), "mkdir -p '/opt/plc/Visu'");
        assert_eq!(&args[..2], &["-p", "2222"]);
        assert_eq!(args[args.len() - 3], "--");
        assert_eq!(args[args.len() - 2], "admin@plc-07");
        assert_eq!(args[args.len() - 1], "mkdir -p '/opt/plc/Visu'");
    }

    #[test]
    fn target_user_overrides_configured_user() {
        let options = configured();
        assert_eq!(options.destination(&Target::new("root@plc-01")), "root@plc-01");
        assert_eq!(options.destination(&Target::new("plc-01")), "admin@plc-01");
    }

    #[test]
    fn interactive_mode_drops_batch_option() {
        let options = SshOptions {
            batch_mode: false,
            connect_timeout: None,
            ..SshOptions::default()
        };
        assert_eq!(
            options.ssh_args(&Target::new("h"), "true"),
            vec!["--", "h", "true"]
        );
    }

    #[test]
    fn dash_prefixed_target_is_never_an_option() {
        let options = SshOptions::default();
        let target = Target::new("-oProxyCommand=touch /tmp/x");

        let ssh = options.ssh_args(&target, "true");
        let separator = ssh.iter().position(|a| a == "--").unwrap();
        assert_eq!(ssh[separator + 1], "-oProxyCommand=touch /tmp/x");

        let scp = options.scp_args(&target, &[PathBuf::from("a.app")], "/opt/plc/Updates/a.app", false);
        let separator = scp.iter().position(|a| a == "--").unwrap();
        assert_eq!(
            &scp[separator + 1..],
            &["a.app", "-oProxyCommand=touch /tmp/x:/opt/plc/Updates/a.app"]
        );
    }
}
