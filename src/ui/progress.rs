use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::output;

/// Per-notebook progress bar counting translated cells.
///
/// Hidden in quiet mode. Cleared from the terminal when dropped.
pub struct CellProgress {
    progress_bar: ProgressBar,
}

impl CellProgress {
    #[allow(clippy::unwrap_used)]
    pub fn new(total: usize, name: &str) -> Self {
        let progress_bar = ProgressBar::new(total as u64);
        if output::is_quiet() {
            progress_bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:30.cyan/blue}] {pos}/{len} cells")
                .unwrap()
                .progress_chars("=> "),
        );
        progress_bar.set_message(name.to_string());

        Self { progress_bar }
    }

    /// Marks cell `index` (zero-based) as done.
    pub fn cell_done(&self, index: usize) {
        self.progress_bar.set_position(index as u64 + 1);
    }

    /// Prints a line to stdout without tearing the bar.
    pub fn println(&self, line: &str) {
        self.progress_bar.suspend(|| println!("{line}"));
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for CellProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_done_advances_position() {
        let progress_bar = ProgressBar::hidden();
        progress_bar.set_length(3);
        let progress = CellProgress { progress_bar };

        progress.cell_done(0);
        progress.cell_done(2);

        assert_eq!(progress.progress_bar.position(), 3);
        assert_eq!(progress.progress_bar.length(), Some(3));
    }
}
