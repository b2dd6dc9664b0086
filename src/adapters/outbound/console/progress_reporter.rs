use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const APPLY_TEMPLATE: &str =
    "   {spinner:.green} Applying alert changes [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// StderrProgressReporter adapter for reporting sync progress to stderr
///
/// Phase messages (fetch, reconcile, completion) are printed as lines. The
/// store writes of one run are shown on a single bar that is cleared once
/// the last change has been applied, so stdout stays free for the summary.
pub struct StderrProgressReporter {
    apply_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            apply_bar: RefCell::new(None),
        }
    }

    /// Returns the bar for a plan of `total` changes, replacing one sized for another plan
    fn apply_bar_for(&self, total: usize) -> ProgressBar {
        let mut slot = self.apply_bar.borrow_mut();
        if let Some(bar) = slot.as_ref().filter(|bar| bar.length() == Some(total as u64)) {
            return bar.clone();
        }
        if let Some(stale) = slot.take() {
            stale.finish_and_clear();
        }

        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(APPLY_TEMPLATE) {
            bar.set_style(style.progress_chars("=>-"));
        }
        *slot = Some(bar.clone());
        bar
    }

    fn clear_apply_bar(&self) {
        if let Some(bar) = self.apply_bar.borrow_mut().take() {
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
        self.clear_apply_bar();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.apply_bar_for(total);
        bar.set_position(current as u64);
        if let Some(change) = message {
            bar.set_message(change.to_string());
        }
        if current >= total {
            self.clear_apply_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_apply_bar();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.clear_apply_bar();
        eprintln!("{}", message.green());
    }
}
