//! Per-stage progress display for the tile pipeline

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar reused by each pipeline stage
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to the terminal
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a stage with `len` steps
    pub fn start_stage(&self, stage: &'static str, len: usize) {
        self.bar.set_message(stage);
        self.bar.set_length(len as u64);
        self.bar.set_position(0);
    }

    /// Advance the current stage by one step
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Steps completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total steps of the current stage
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
