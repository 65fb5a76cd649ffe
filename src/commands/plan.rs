use anyhow::Result;
use plc_deploy::presentation::factory;
use plc_deploy::presentation::TargetArgs;

use super::{load_config, Globals};
use crate::ui::views::plan::render_plan;

/// Build and print the plan; never contacts a controller
pub fn cmd_plan(globals: &Globals, targets: &TargetArgs, root: Option<String>) -> Result<()> {
    let ui = globals.ui();
    let mut config = load_config(globals, targets, &ui)?;
    if let Some(root) = root {
        config.remote.root = root;
    }

    let inputs = factory::create_check_use_case().execute(&factory::check_options(
        &config,
        factory::host_source(&targets.hosts, &config.deploy.hosts_file)?,
        false,
    ))?;

    let orchestrator = factory::create_orchestrator(&config);
    let plan = orchestrator.plan(&inputs.bundle);

    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": "plan",
            "command": "plan",
            "root": config.remote.root,
            "targets": inputs.targets,
            "steps": plan,
        }))?;
    } else {
        print!(
            "{}",
            render_plan(
                &config.remote.root,
                &inputs.targets,
                &plan,
                ui.color,
                ui.unicode
            )
        );
    }

    Ok(())
}
