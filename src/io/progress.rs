//! Per-cell progress display for a single-sheet run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Drives the cell progress bar for one sheet run
///
/// A sheet has at most a few dozen cells, so a single bar over cell count is
/// enough; per-stage bars would outnumber the work.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the sheet's cell count
    pub fn new(cell_count: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(CELL_STYLE.clone());
        bar.set_message("cells");
        Self { bar }
    }

    /// Advance the bar past the given 0-based cell index
    pub fn update_cell(&self, cell_index: usize) {
        self.bar.set_position(cell_index as u64 + 1);
    }

    /// Remove the bar once the run completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
