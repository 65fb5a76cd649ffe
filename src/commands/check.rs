use anyhow::Result;
use plc_deploy::presentation::factory;
use plc_deploy::presentation::TargetArgs;

use super::{load_config, Globals};
use crate::ui::views::check::render_check;

pub fn cmd_check(globals: &Globals, targets: &TargetArgs, fingerprint: bool) -> Result<()> {
    let ui = globals.ui();
    let config = load_config(globals, targets, &ui)?;

    let inputs = factory::create_check_use_case().execute(&factory::check_options(
        &config,
        factory::host_source(&targets.hosts, &config.deploy.hosts_file)?,
        fingerprint,
    ))?;

    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": "check",
            "command": "check",
            "status": "valid",
            "bundle": inputs.bundle,
            "targets": inputs.targets,
            "artifacts": inputs.fingerprints,
        }))?;
    } else {
        print!(
            "{}",
            render_check(
                &inputs.bundle,
                &inputs.targets,
                &inputs.fingerprints,
                ui.color,
                ui.unicode
            )
        );
    }

    Ok(())
}
