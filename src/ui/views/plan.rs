use plc_deploy::domain::entities::DeploymentPlan;
use plc_deploy::domain::value_objects::Target;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_plan(
    root: &str,
    targets: &[Target],
    plan: &DeploymentPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Plan, "plc-deploy plan");
    header.add("Root", root);
    header.add("Targets", targets.len().to_string());
    let mut out = header.render(supports_color, supports_unicode);

    if targets.is_empty() {
        out.push_str(&format!(
            "\n{} no targets\n",
            Icon::Pending.colored(supports_color, supports_unicode)
        ));
        return out;
    }

    // Every target receives the same plan
    for target in targets {
        out.push_str(&format!(
            "\n{}\n",
            ColoredText::info(target.as_str()).bold().render(supports_color)
        ));
        for (index, step) in plan.iter().enumerate() {
            let local = step
                .local()
                .map(|p| format!("{} -> ", p.display()))
                .unwrap_or_default();
            out.push_str(&format!(
                "  {:>2}. {:<17} {}{}\n",
                index + 1,
                step.action(),
                local,
                step.remote()
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use plc_deploy::domain::entities::{DeploymentStep, StepRole};
    use std::path::PathBuf;

    fn plan() -> DeploymentPlan {
        DeploymentPlan::new(vec![
            DeploymentStep::CopyFile {
                role: StepRole::Project,
                local: PathBuf::from("Archive.prj"),
                remote: "/opt/plc/Archive.prj".to_string(),
            },
            DeploymentStep::EnsureRemoteDir {
                role: StepRole::VisuDir,
                remote: "/opt/plc/Visu".to_string(),
            },
        ])
    }

    #[test]
    fn lists_steps_per_target() {
        let targets = vec![Target::new("plc-01"), Target::new("plc-02")];
        let rendered = render_plan("/opt/plc", &targets, &plan(), false, false);

        assert!(rendered.contains("\nplc-01\n"));
        assert!(rendered.contains("\nplc-02\n"));
        assert!(rendered.contains("   1. copy_file         Archive.prj -> /opt/plc/Archive.prj\n"));
        assert!(rendered.contains("   2. ensure_remote_dir /opt/plc/Visu\n"));
    }

    #[test]
    fn empty_target_list() {
        let rendered = render_plan("/opt/plc", &[], &plan(), false, false);
        assert!(rendered.contains("[ ] no targets"));
    }
}
