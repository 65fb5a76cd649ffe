//! plc-deploy CLI
//!
//! Usage: plc-deploy [--json] [-v] [-c <PATH>] <COMMAND>
//!
//! Commands:
//!   deploy  Deploy the artifacts to every target
//!   plan    Print each target's plan without contacting it
//!   check   Validate local artifacts and the target list

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use plc_deploy::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let globals = commands::Globals {
        json: cli.json,
        verbose: cli.verbose,
        config: cli.config,
    };

    match cli.command {
        Commands::Deploy {
            targets,
            policy,
            root,
            report,
        } => commands::deploy::cmd_deploy(&globals, &targets, policy, root, report.as_deref()),
        Commands::Plan { targets, root } => commands::plan::cmd_plan(&globals, &targets, root),
        Commands::Check {
            targets,
            no_fingerprint,
        } => commands::check::cmd_check(&globals, &targets, !no_fingerprint),
    }
}
