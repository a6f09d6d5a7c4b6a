//! Busy indicator shown while an ask dispatch is outstanding

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner displayed during a backend dispatch.
///
/// A dispatch is a single request with no progress granularity, so this is
/// a plain steady-tick spinner that is cleared once the reply (or the
/// failure notice) lands in the log.
pub struct BusySpinner {
    bar: ProgressBar,
}

impl BusySpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Remove the spinner from the terminal
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
