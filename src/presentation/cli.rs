//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--config`) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::policies::FailurePolicy;

/// plc-deploy - push a controller project, binaries and visualization to a fleet
#[derive(Parser, Debug)]
#[command(name = "plc-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file [default: plc-deploy.toml]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Target selection shared by every subcommand
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// Target host (repeatable); replaces the hosts file
    #[arg(long = "host", value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Hosts file, one target per line
    #[arg(long, value_name = "PATH", conflicts_with = "hosts")]
    pub hosts_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the artifacts to every target
    Deploy {
        #[command(flatten)]
        targets: TargetArgs,

        /// What to do after a host fails
        #[arg(long, value_enum)]
        policy: Option<FailurePolicy>,

        /// Application root on the controllers
        #[arg(long, value_name = "PATH")]
        root: Option<String>,

        /// Write the run result as JSON to this file
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// Print each target's plan without contacting it
    Plan {
        #[command(flatten)]
        targets: TargetArgs,

        /// Application root on the controllers
        #[arg(long, value_name = "PATH")]
        root: Option<String>,
    },

    /// Validate local artifacts and the target list
    Check {
        #[command(flatten)]
        targets: TargetArgs,

        /// Skip sha256 fingerprints
        #[arg(long)]
        no_fingerprint: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deploy_with_repeated_hosts() {
        let cli = Cli::try_parse_from([
            "plc-deploy",
            "deploy",
            "--host",
            "10.0.0.1",
            "--host",
            "10.0.0.2",
            "--policy",
            "best-effort-continue",
        ])
        .unwrap();

        match cli.command {
            Commands::Deploy {
                targets, policy, ..
            } => {
                assert_eq!(targets.hosts, vec!["10.0.0.1", "10.0.0.2"]);
                assert_eq!(policy, Some(FailurePolicy::BestEffortContinue));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["plc-deploy", "plan", "--json", "-vv", "-c", "site.toml"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn host_and_hosts_file_conflict() {
        let result = Cli::try_parse_from([
            "plc-deploy",
            "deploy",
            "--host",
            "a",
            "--hosts-file",
            "hosts.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["plc-deploy", "deploy", "--policy", "sometimes"]);
        assert!(result.is_err());
    }
}
