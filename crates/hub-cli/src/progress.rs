use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown on stderr while a request is in flight.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Loading callback for session and inventory operations.
///
/// `true` starts a spinner with `message`, `false` clears it.
pub fn loading(message: &str) -> impl FnMut(bool) + Send + 'static {
    let message = message.to_string();
    let mut current: Option<Progress> = None;
    move |on| {
        if on {
            if current.is_none() {
                current = Some(Progress::spinner(&message));
            }
        } else if let Some(progress) = current.take() {
            progress.finish_clear();
        }
    }
}
