use plc_deploy::domain::entities::{HostOutcome, RunResult};
use plc_deploy::domain::policies::FailurePolicy;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    root: &str,
    target_count: usize,
    step_count: usize,
    policy: FailurePolicy,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "plc-deploy deploy");
    header.add("Root", root);
    header.add("Targets", target_count.to_string());
    header.add("Steps", format!("{} per target", step_count));
    header.add("Policy", policy.as_str());
    header.render(supports_color, supports_unicode)
}

/// One status line per attempted host
pub fn render_host_line(
    outcome: &HostOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome.first_failure() {
        None => format!(
            "{} {} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            outcome.target(),
            ColoredText::dim(format!(
                "({}/{} steps)",
                outcome.steps_succeeded(),
                outcome.steps_planned()
            ))
            .render(supports_color)
        ),
        Some(failure) => format!(
            "{} {} {} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            outcome.target(),
            ColoredText::dim(format!(
                "(step {}/{})",
                failure.index + 1,
                outcome.steps_planned()
            ))
            .render(supports_color),
            ColoredText::error(failure.to_string()).render(supports_color)
        ),
    }
}

/// Which target and step stopped the run, and what was left untouched
pub fn render_failure_statement(result: &RunResult) -> Option<String> {
    let failed = result.first_failure()?;
    let error = failed.to_error()?;

    let mut statement = match result.policy() {
        FailurePolicy::StopOnFirstFailure => format!("Deployment stopped: {}", error),
        FailurePolicy::BestEffortContinue => format!("First failure: {}", error),
    };

    if !result.not_attempted().is_empty() {
        let untouched: Vec<&str> = result.not_attempted().iter().map(|t| t.as_str()).collect();
        statement.push_str(&format!("\nNot attempted: {}", untouched.join(", ")));
    }

    Some(statement)
}

pub fn render_deploy_summary(
    result: &RunResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if result.is_empty() {
        let mut summary = ResultSummary::success("Deploy Complete");
        summary.add_line(Icon::Pending, "no targets; nothing deployed");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = if result.is_success() {
        ResultSummary::success("Deploy Complete")
    } else {
        ResultSummary::failure("Deploy Failed")
    };

    summary.add_stat("succeeded", result.succeeded().count());
    summary.add_stat("failed", result.failed().count());
    if !result.not_attempted().is_empty() {
        summary.add_stat("not attempted", result.not_attempted().len());
    }

    for outcome in result.failed() {
        if let Some(failure) = outcome.first_failure() {
            summary.add_line(Icon::Error, format!("{}: {}", outcome.target(), failure));
        }
    }
    for target in result.not_attempted() {
        summary.add_line(Icon::Pending, format!("{}: not attempted", target));
    }

    if !result.is_success() {
        summary.with_next_step("Fix the failing host and rerun; deployed hosts are unaffected");
    }

    summary.render(supports_color, supports_unicode)
}
