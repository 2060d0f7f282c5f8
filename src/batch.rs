//! Batch analysis: independent analyses of every resume in a directory
//!
//! Each file is loaded and analyzed on its own; there is no shared state
//! between files, so the work fans out over rayon without coordination.

use crate::error::Result;
use crate::input::InputManager;
use crate::output::report::{BatchEntry, BatchReport, ResumeReport};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

pub struct BatchRunner {
    manager: InputManager,
    parallel: bool,
    show_progress: bool,
}

impl BatchRunner {
    pub fn new(manager: InputManager, parallel: bool) -> Self {
        Self {
            manager,
            parallel,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Analyze every discovered file. Per-file failures are recorded in the
    /// report; only a failure to read the directory itself is an error.
    pub fn run(&self, dir: &Path) -> Result<BatchReport> {
        let files = self.manager.discover(dir)?;
        log::info!("Analyzing {} resume files from {}", files.len(), dir.display());

        let bar = self.progress_bar(files.len() as u64);

        let entries: Vec<BatchEntry> = if self.parallel {
            files
                .par_iter()
                .progress_with(bar.clone())
                .map(|path| self.analyze_file(path))
                .collect()
        } else {
            files
                .iter()
                .progress_with(bar.clone())
                .map(|path| self.analyze_file(path))
                .collect()
        };

        bar.finish_and_clear();

        Ok(BatchReport {
            directory: dir.display().to_string(),
            entries,
        })
    }

    fn analyze_file(&self, path: &Path) -> BatchEntry {
        let source = path.display().to_string();

        match self.manager.load_record(path) {
            Ok(record) => BatchEntry::Analyzed(ResumeReport::build(source, &record)),
            Err(e) => {
                log::warn!("Skipping {}: {}", source, e);
                BatchEntry::Failed {
                    source,
                    error: e.to_string(),
                }
            }
        }
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("Scoring resumes");
        bar
    }
}
