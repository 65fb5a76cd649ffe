//! Console Event Sink
//!
//! Human-readable progress for deploy runs. Per-step lines are shown only
//! with `-v`; host results and failures are always printed.

use std::io::{self, Write};
use std::sync::Mutex;

use plc_deploy::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::deploy::render_host_line;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    detailed: bool,
    target_count: Mutex<usize>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode, ui.verbose > 0)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        detailed: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            detailed,
            target_count: Mutex::new(0),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn total(&self) -> usize {
        self.target_count.lock().map(|n| *n).unwrap_or(0)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started { target_count, .. } => {
                if let Ok(mut n) = self.target_count.lock() {
                    *n = target_count;
                }
            }
            DeployEvent::NoTargets => {
                self.line(format!(
                    "{} no targets",
                    Icon::Pending.colored(self.color, self.unicode)
                ));
            }
            DeployEvent::HostStarted { index, target, .. } => {
                self.line(format!(
                    "\n{} {}",
                    ColoredText::dim(format!("[{}/{}]", index + 1, self.total()))
                        .render(self.color),
                    ColoredText::info(target.as_str()).bold().render(self.color)
                ));
            }
            DeployEvent::StepStarted { index, step, .. } => {
                self.line(format!(
                    "  {} {}. {}",
                    Icon::Progress.colored(self.color, self.unicode),
                    index + 1,
                    step
                ));
            }
            DeployEvent::StepSucceeded { index, step, .. } => {
                self.line(format!(
                    "  {} {}. {}",
                    Icon::Success.colored(self.color, self.unicode),
                    index + 1,
                    step
                ));
            }
            DeployEvent::StepFailed {
                index, step, error, ..
            } => {
                self.line(format!(
                    "  {} {}. {}: {}",
                    Icon::Error.colored(self.color, self.unicode),
                    index + 1,
                    step,
                    ColoredText::error(error.to_string()).render(self.color)
                ));
            }
            DeployEvent::HostCompleted { outcome, .. } => {
                self.line(render_host_line(&outcome, self.color, self.unicode));
            }
            DeployEvent::HostsNotAttempted { targets } => {
                let names: Vec<&str> = targets.iter().map(|t| t.as_str()).collect();
                self.line(format!(
                    "\n{} aborting; not attempted: {}",
                    Icon::Warning.colored(self.color, self.unicode),
                    names.join(", ")
                ));
            }
            // Rendered by the summary view
            DeployEvent::BundleLoaded { .. } | DeployEvent::Completed { .. } => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
