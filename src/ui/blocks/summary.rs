use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Closing block of a command: title, counters, then detail lines
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    lines: Vec<(Icon, String)>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_status(title, true)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::with_status(title, false)
    }

    fn with_status(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            lines: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add a detail line with its own status icon
    pub fn add_line(&mut self, icon: Icon, message: impl Into<String>) {
        self.lines.push((icon, message.into()));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.add_line(Icon::Warning, message);
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (
                Icon::Success,
                ColoredText::success(self.title.as_str()).bold(),
            )
        } else {
            (Icon::Error, ColoredText::error(self.title.as_str()).bold())
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        if !self.stats.is_empty() {
            let stats: Vec<String> = self
                .stats
                .iter()
                .map(|(label, count)| format!("{} {}", count, label))
                .collect();
            out.push_str(&format!("  {}\n", stats.join(", ")));
        }

        for (icon, line) in &self.lines {
            out.push_str(&format!(
                "  {} {}\n",
                icon.colored(supports_color, supports_unicode),
                line
            ));
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success_icon_in_title() {
        let mut summary = ResultSummary::success("Deploy Complete");
        summary.add_stat("succeeded", 2);

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[OK] Deploy Complete"));
        assert!(rendered.contains("  2 succeeded\n"));
    }

    #[test]
    fn failure_lists_detail_lines() {
        let mut summary = ResultSummary::failure("Deploy Failed");
        summary.add_stat("succeeded", 1);
        summary.add_stat("failed", 1);
        summary.add_warning("not attempted: plc-03");

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[FAIL] Deploy Failed"));
        assert!(rendered.contains("1 succeeded, 1 failed"));
        assert!(rendered.contains("[WARN] not attempted: plc-03"));
    }
}
