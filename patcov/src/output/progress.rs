use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create and return a spinner shown while a corpus scan runs.
///
/// In test mode, returns a hidden progress bar to avoid polluting test
/// output.
///
/// # Panics
///
/// Panics if the progress style template is invalid (should never happen
/// with a hardcoded template).
#[must_use]
pub fn create_scan_spinner(corpus: &str) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("scanning {corpus}…"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
