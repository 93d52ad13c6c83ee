//! Progress display over configuration files and their phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Worlds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates a batch bar over files and a bar over the current file's phases
///
/// The batch bar only appears when more than one file is processed.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    phase_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            phase_bar: None,
        }
    }

    /// Prepare bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let phase_bar = ProgressBar::new(0);
        phase_bar.set_style(PHASE_STYLE.clone());
        self.phase_bar = Some(self.multi_progress.add(phase_bar));
    }

    /// Reset the phase bar for a new file
    pub fn start_file(&self, path: &Path, phase_count: usize) {
        if let Some(bar) = &self.phase_bar {
            bar.set_length(phase_count as u64);
            bar.set_position(0);
            bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.set_message(String::new());
        }
    }

    /// Report a completed phase
    pub fn complete_phase(&self, label: &str) {
        if let Some(bar) = &self.phase_bar {
            bar.inc(1);
            bar.set_message(label.to_string());
        }
    }

    /// Mark the current file as done
    pub fn complete_file(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
        if let Some(bar) = &self.phase_bar {
            bar.set_message("✓".to_string());
        }
    }

    /// Position of the phase bar, if one exists
    pub fn phase_position(&self) -> Option<u64> {
        self.phase_bar.as_ref().map(ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish_with_message("All worlds generated");
        }
        if let Some(bar) = &self.phase_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
