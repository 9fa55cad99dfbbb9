use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} - {msg}";

/// StderrProgressReporter adapter for status output on stderr
///
/// stdout is reserved for the report, so every message here goes to stderr.
/// Multi-step work is shown with an indicatif bar that is cleared before the
/// next plain message.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        match slot.as_ref() {
            Some(bar) => {
                bar.set_length(total as u64);
                bar.clone()
            }
            None => {
                let style = ProgressStyle::default_bar()
                    .template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-");
                let bar = ProgressBar::new(total as u64).with_style(style);
                *slot = Some(bar.clone());
                bar
            }
        }
    }

    fn clear_bar(&self) {
        if let Some(bar) = self.progress_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.bar(total);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        self.clear_bar();
        eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message.green());
    }
}
