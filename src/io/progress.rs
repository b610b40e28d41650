//! Sheet-level progress display for batch runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SHEET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Sheets: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks progress across the sheets of a batch
///
/// Diagnostics are printed through the manager so they do not tear the bar.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(SHEET_STYLE.clone());
        Self { bar }
    }

    /// Set the number of sheets in the batch
    pub fn initialize(&self, sheet_count: usize) {
        self.bar.set_length(sheet_count as u64);
        self.bar.set_position(0);
    }

    /// Show the sheet currently being produced
    pub fn start_sheet(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Advance past a finished or skipped sheet
    pub fn complete_sheet(&self) {
        self.bar.inc(1);
    }

    /// Print a diagnostic line above the bar
    // Allow print for user feedback on sheet results
    #[allow(clippy::print_stderr)]
    pub fn report(&self, message: &str) {
        self.bar.suspend(|| eprintln!("{message}"));
    }

    /// Number of sheets completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
