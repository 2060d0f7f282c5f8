//! Report structures handed to the formatters

use crate::analysis::{analyze, progress, Analysis, ResumeRecord};
use serde::{Deserialize, Serialize};

/// One analyzed resume together with its completion progress.
/// The two numbers are kept side by side and never combined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReport {
    pub source: String,
    pub candidate: Option<String>,
    pub analysis: Analysis,
    pub progress: u8,
    pub scorer_version: String,
}

impl ResumeReport {
    pub fn build(source: impl Into<String>, resume: &ResumeRecord) -> Self {
        let info = &resume.personal_info;
        let name = format!("{} {}", info.first_name.trim(), info.last_name.trim());
        let candidate = Some(name.trim().to_string()).filter(|n| !n.is_empty());

        Self {
            source: source.into(),
            candidate,
            analysis: analyze(resume),
            progress: progress(resume),
            scorer_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Outcome of one file in a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum BatchEntry {
    Analyzed(ResumeReport),
    Failed { source: String, error: String },
}

impl BatchEntry {
    pub fn source(&self) -> &str {
        match self {
            BatchEntry::Analyzed(report) => &report.source,
            BatchEntry::Failed { source, .. } => source,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub directory: String,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn analyzed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BatchEntry::Analyzed(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries.len() - self.analyzed_count()
    }
}

/// Verdict label for a 0-100 score
pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}
