//! Progress display for generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting resolved interior cells
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a bar drawn to stderr for `total_cells` interior cells
    pub fn new(total_cells: usize, label: &str) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Create a bar that never draws, for quiet runs and tests
    pub fn hidden(total_cells: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total_cells as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Report the number of cells resolved so far
    pub fn update(&self, resolved: usize) {
        self.bar.set_position(resolved as u64);
    }

    /// Current reported position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of cells
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Mark the run as finished
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Remove the bar after a failed run
    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}
