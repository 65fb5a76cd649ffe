//! Command handlers for the plc-deploy binary

pub mod check;
pub mod deploy;
pub mod plan;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plc_deploy::config::{self, Config, DEFAULT_CONFIG_FILE};
use plc_deploy::presentation::TargetArgs;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct Globals {
    pub json: bool,
    pub verbose: u8,
    pub config: Option<PathBuf>,
}

impl Globals {
    pub fn ui(&self) -> UiContext {
        UiContext::new(self.json, self.verbose)
    }
}

/// Load the config file (defaults if the default file is absent) and
/// apply the target flags on top
pub fn load_config(globals: &Globals, targets: &TargetArgs, ui: &UiContext) -> Result<Config> {
    let (path, explicit) = match &globals.config {
        Some(path) => (path.as_path(), true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let (mut config, warnings) = config::load_or_default(path, explicit)
        .with_context(|| format!("failed to load config {}", path.display()))?;

    for warning in &warnings {
        tracing::warn!(key = %warning.key, line = ?warning.line, "unknown config key");
        if !ui.json {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
    }

    if let Some(hosts_file) = &targets.hosts_file {
        config.deploy.hosts_file = hosts_file.clone();
    }

    Ok(config)
}
