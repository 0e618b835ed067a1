use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::output;

/// Per-chunk progress indicator (`Translating chunk 3/12...`).
///
/// Draws to stderr and clears itself when dropped. When stderr is not a
/// terminal the bar cannot draw, so each chunk gets a plain status line instead.
pub struct ChunkProgress {
    progress_bar: ProgressBar,
    total: usize,
    line_mode: bool,
}

impl ChunkProgress {
    /// Creates a progress bar for `total` chunks, hidden in quiet mode.
    #[allow(clippy::unwrap_used)]
    pub fn new(total: usize) -> Self {
        if output::is_quiet() {
            return Self::hidden(total);
        }

        let progress_bar = ProgressBar::with_draw_target(
            Some(total as u64),
            ProgressDrawTarget::stderr(),
        );
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("Translating chunk {pos}/{len}... {wide_bar}")
                .unwrap(),
        );
        let line_mode = progress_bar.is_hidden();

        Self {
            progress_bar,
            total,
            line_mode,
        }
    }

    /// Creates a progress bar that never draws.
    pub fn hidden(total: usize) -> Self {
        Self {
            progress_bar: ProgressBar::with_draw_target(
                Some(total as u64),
                ProgressDrawTarget::hidden(),
            ),
            total,
            line_mode: false,
        }
    }

    /// Marks chunk `index` (zero-based) as in flight.
    pub fn start_chunk(&self, index: usize) {
        self.progress_bar.set_position(index as u64 + 1);
        if let Some(line) = self.status_line(index) {
            crate::status!("{line}");
        }
    }

    fn status_line(&self, index: usize) -> Option<String> {
        self.line_mode
            .then(|| format!("Translating chunk {}/{}...", index + 1, self.total))
    }

    /// Runs `f` with the bar hidden so its output does not tear the bar.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    /// Clears the bar from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for ChunkProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
