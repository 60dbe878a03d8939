//! Progress reporting for downloads.
//!
//! The reporter is injected into the download step rather than bound into
//! shared state, so tests can observe exactly what would be displayed.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives download progress updates. `begin` is called once with the
/// total size (0 when unknown), `update` per chunk with the clamped byte
/// count, and `finish` once the transfer completes.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    fn begin(&self, total_bytes: u64);
    fn update(&self, transferred_bytes: u64);
    fn finish(&self);
}

/// The value to display for a transfer: never more than the announced
/// total. A total of zero means the size is unknown and nothing is clamped.
pub fn display_bytes(transferred: u64, total: u64) -> u64 {
    if total == 0 {
        transferred
    } else {
        transferred.min(total)
    }
}

/// Terminal progress bar backed by indicatif.
pub struct BarReporter {
    bar: ProgressBar,
}

impl Default for BarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BarReporter {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total_bytes: u64) {
        if total_bytes > 0 {
            self.bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
                    .expect("progress template is static and valid"),
            );
            self.bar.set_length(total_bytes);
        } else {
            self.bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {bytes}")
                    .expect("progress template is static and valid"),
            );
        }
        self.bar
            .set_draw_target(indicatif::ProgressDrawTarget::stdout());
    }

    fn update(&self, transferred_bytes: u64) {
        self.bar.set_position(transferred_bytes);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

/// Reporter that displays nothing. Used when stdout is not a terminal
/// worth drawing on and in tests.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn begin(&self, _total_bytes: u64) {}
    fn update(&self, _transferred_bytes: u64) {}
    fn finish(&self) {}
}
