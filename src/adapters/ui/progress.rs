//! Spinner helpers for long-running pipeline steps.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a ticking spinner with the given message. Caller clears it with
/// `finish_and_clear()` when the step completes.
pub fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner());
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
