//! "Fetching data" spinner shown on stderr while a request is in flight.

use std::{future::Future, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner drawn to stderr; cleared when dropped.
///
/// Nothing is drawn when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &'static str) -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .map(|s| s.tick_chars(TICKS))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Await `request` behind a "Fetching data" spinner.
///
/// The spinner is gone before the caller prints anything.
pub async fn fetching<F: Future>(request: F) -> F::Output {
    let _spinner = Spinner::start("Fetching data");
    request.await
}
