use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use plc_deploy::domain::policies::FailurePolicy;
use plc_deploy::domain::ports::{DeployEvent, DeployEventSink};
use plc_deploy::domain::services::plan_len;
use plc_deploy::infrastructure::JsonEventSink;
use plc_deploy::presentation::factory;
use plc_deploy::presentation::TargetArgs;
use plc_deploy::RunResult;

use super::{load_config, Globals};
use crate::ui::console::ConsoleEventSink;
use crate::ui::views::deploy::{
    render_deploy_header, render_deploy_summary, render_failure_statement,
};

pub fn cmd_deploy(
    globals: &Globals,
    targets: &TargetArgs,
    policy: Option<FailurePolicy>,
    root: Option<String>,
    report: Option<&Path>,
) -> Result<()> {
    let ui = globals.ui();
    let mut config = load_config(globals, targets, &ui)?;
    if let Some(policy) = policy {
        config.deploy.failure_policy = policy;
    }
    if let Some(root) = root {
        config.remote.root = root;
    }

    // Local inputs are validated before any controller is contacted
    let inputs = factory::create_check_use_case().execute(&factory::check_options(
        &config,
        factory::host_source(&targets.hosts, &config.deploy.hosts_file)?,
        true,
    ))?;

    let event_sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(&ui))
    };

    event_sink.on_event(DeployEvent::BundleLoaded {
        artifacts: inputs.fingerprints.clone(),
    });

    if !ui.json {
        print!(
            "{}",
            render_deploy_header(
                &config.remote.root,
                inputs.targets.len(),
                plan_len(&inputs.bundle),
                config.deploy.failure_policy,
                ui.color,
                ui.unicode,
            )
        );
    }

    let orchestrator = factory::create_orchestrator(&config);
    let result = orchestrator.run_with_events(&inputs.bundle, &inputs.targets, event_sink);

    if let Some(path) = report {
        write_report(path, &result)?;
    }

    if !ui.json {
        print!("{}", render_deploy_summary(&result, ui.color, ui.unicode));
        if let Some(statement) = render_failure_statement(&result) {
            eprintln!("\n{}", statement);
        }
    }

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn write_report(path: &Path, result: &RunResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    tracing::info!(path = %path.display(), "run report written");
    Ok(())
}
