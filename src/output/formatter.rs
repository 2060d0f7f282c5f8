//! Output formatters: console, JSON and Markdown

use crate::analysis::classifier::ImprovementArea;
use crate::analysis::profiles::Section;
use crate::analysis::recommendations::Priority;
use crate::config::OutputFormat;
use crate::error::{Result, ResumeScorerError};
use crate::output::report::{score_label, BatchEntry, BatchReport, ResumeReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String>;
    fn format_batch(&self, batch: &BatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the configured formatter
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = score_label(score);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::High => "[*]",
            Priority::Medium => "[-]",
            Priority::Low => "[+]",
        }
    }

    fn format_sections(sections: &[Section]) -> String {
        sections.iter().map(|s| s.label()).collect::<Vec<_>>().join(", ")
    }

    fn format_improvement_area(&self, area: &ImprovementArea) -> String {
        format!(
            "  • {}: {:.1}/{} ({}%)\n",
            area.section.label(),
            area.current_score,
            area.max_possible,
            area.percentage
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let analysis = &report.analysis;
        let weights = analysis.industry.weights();
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&format!("Source: {}\n", report.source));
        if let Some(candidate) = &report.candidate {
            output.push_str(&format!("Candidate: {}\n", candidate));
        }
        output.push_str(&format!(
            "Analyzed: {} | Profile: {}\n",
            analysis.last_analyzed.format("%Y-%m-%d %H:%M:%S UTC"),
            analysis.industry
        ));

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&format!(
            "Quality Score: {}/100 {}\n",
            analysis.total,
            self.format_score_badge(analysis.total)
        ));
        output.push_str(&format!("Completion: {}%\n", report.progress));

        output.push_str(&self.format_header("Section Breakdown", 3));
        for (section, score) in analysis.breakdown.iter() {
            output.push_str(&format!(
                "  {:<14} {:>5.1} / {}\n",
                section.label(),
                score,
                weights.weight(section)
            ));
        }

        if !analysis.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&Self::format_sections(&analysis.strengths), Color::Green)
            ));
        }

        if !analysis.weaknesses.is_empty() {
            output.push_str(&self.format_header("Weaknesses", 3));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&Self::format_sections(&analysis.weaknesses), Color::Yellow)
            ));
        }

        output.push_str(&self.format_header("Recommendations", 2));
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} {} {}\n",
                i + 1,
                self.format_priority_icon(rec.priority),
                self.colorize(&rec.message, Color::White),
                self.colorize(&format!("({})", rec.priority), Color::BrightBlack)
            ));
            output.push_str(&format!("   Action: {}\n", rec.action));
        }

        if self.detailed {
            if !analysis.improvement_areas.is_empty() {
                output.push_str(&self.format_header("Improvement Areas", 3));
                for area in &analysis.improvement_areas {
                    output.push_str(&self.format_improvement_area(area));
                }
            }

            if !analysis.keywords.is_empty() {
                output.push_str(&self.format_header("Keywords", 3));
                output.push_str(&format!("  {}\n", analysis.keywords.join(", ")));
            }

            output.push_str(&self.format_header("Content Metrics", 3));
            output.push_str(&format!("  Words: {}\n", analysis.metrics.word_count));
            output.push_str(&format!("  Readability: {}/100\n", analysis.metrics.readability_score));
        }

        output.push_str(&format!(
            "\n{} resume-scorer v{} | profile tables v{}\n",
            self.colorize("ℹ", Color::Blue),
            report.scorer_version,
            analysis.profile_version
        ));

        Ok(output)
    }

    fn format_batch(&self, batch: &BatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("BATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Directory: {} | Analyzed: {} | Failed: {}\n\n",
            batch.directory,
            batch.analyzed_count(),
            batch.failed_count()
        ));
        output.push_str(&format!("  {:>5} {:>9}  {:<9} {}\n", "Score", "Progress", "Profile", "File"));

        for entry in &batch.entries {
            match entry {
                BatchEntry::Analyzed(report) => {
                    output.push_str(&format!(
                        "  {:>5} {:>8}%  {:<9} {}\n",
                        report.analysis.total,
                        report.progress,
                        report.analysis.industry,
                        report.source
                    ));
                }
                BatchEntry::Failed { source, error } => {
                    output.push_str(&format!(
                        "  {:>5} {:>9}  {:<9} {} {}\n",
                        "-",
                        "-",
                        "-",
                        source,
                        self.colorize(&format!("({})", error), Color::Red)
                    ));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_batch(&self, batch: &BatchReport) -> Result<String> {
        self.to_json(batch)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let analysis = &report.analysis;
        let weights = analysis.industry.weights();
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");

        if let Some(candidate) = &report.candidate {
            output.push_str(&format!("**Candidate:** {}\n\n", candidate));
        }

        if self.include_metadata {
            output.push_str(&format!(
                "**Analyzed:** {} | **Profile:** `{}` | **Source:** `{}`\n\n",
                analysis.last_analyzed.format("%Y-%m-%d %H:%M:%S UTC"),
                analysis.industry,
                report.source
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Quality Score:** {}/100 ({})\n\n",
            analysis.total,
            score_label(analysis.total)
        ));
        output.push_str(&format!("**Completion:** {}%\n\n", report.progress));

        output.push_str("### Section Breakdown\n\n");
        output.push_str("| Section | Score | Max |\n");
        output.push_str("|---------|-------|-----|\n");
        for (section, score) in analysis.breakdown.iter() {
            output.push_str(&format!(
                "| {} | {:.1} | {} |\n",
                section.label(),
                score,
                weights.weight(section)
            ));
        }
        output.push('\n');

        if !analysis.strengths.is_empty() {
            output.push_str("### Strengths\n\n");
            for section in &analysis.strengths {
                output.push_str(&format!("- {}\n", section.label()));
            }
            output.push('\n');
        }

        if !analysis.improvement_areas.is_empty() {
            output.push_str("### Areas for Improvement\n\n");
            for area in &analysis.improvement_areas {
                output.push_str(&format!(
                    "- {} ({}% of {} points)\n",
                    area.section.label(),
                    area.percentage,
                    area.max_possible
                ));
            }
            output.push('\n');
        }

        output.push_str("## Recommendations\n\n");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. **{}** _({})_\n", i + 1, rec.message, rec.priority));
            output.push_str(&format!("   - {}\n", rec.action));
        }
        output.push('\n');

        if !analysis.keywords.is_empty() {
            output.push_str("## Keywords\n\n");
            output.push_str(
                &analysis
                    .keywords
                    .iter()
                    .map(|k| format!("`{}`", k))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            output.push_str("\n\n");
        }

        Ok(output)
    }

    fn format_batch(&self, batch: &BatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Batch Analysis\n\n");
        output.push_str(&format!("**Directory:** `{}`\n\n", batch.directory));
        output.push_str("| File | Score | Progress | Profile |\n");
        output.push_str("|------|-------|----------|---------|\n");

        for entry in &batch.entries {
            match entry {
                BatchEntry::Analyzed(report) => output.push_str(&format!(
                    "| `{}` | {} | {}% | {} |\n",
                    report.source, report.analysis.total, report.progress, report.analysis.industry
                )),
                BatchEntry::Failed { source, error } => {
                    output.push_str(&format!("| `{}` | error: {} | - | - |\n", source, error))
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, report: &ResumeReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_batch(&self, batch: &BatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_batch(batch)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeScorerError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::record::{ResumeRecord, Skill};
    use tempfile::TempDir;

    fn sample_report() -> ResumeReport {
        let mut resume = ResumeRecord::default();
        resume.personal_info.first_name = "Grace".to_string();
        resume.personal_info.last_name = "Hopper".to_string();
        resume.personal_info.title = "Compiler Engineer".to_string();
        resume.skills = vec![Skill::from("COBOL"), Skill::from("Assembly"), Skill::from("Fortran")];
        ResumeReport::build("grace.json", &resume)
    }

    #[test]
    fn test_console_plain_output() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();
        assert!(output.contains("Candidate: Grace Hopper"));
        assert!(output.contains("Quality Score:"));
        assert!(output.contains("Recommendations"));
        assert!(output.contains("Keywords"));
        assert!(output.contains("compiler"));
    }

    #[test]
    fn test_console_hides_details_by_default() {
        let output = ConsoleFormatter::new(false, false).format_report(&sample_report()).unwrap();
        assert!(!output.contains("Content Metrics"));
    }

    #[test]
    fn test_json_round_trips_totals() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["analysis"]["total"], report.analysis.total);
        assert_eq!(value["progress"], report.progress);
        assert_eq!(value["analysis"]["industry"], "default");
        assert!(value["analysis"]["breakdown"]["personalInfo"].is_number());
        assert!(value["analysis"]["lastAnalyzed"].is_string());
    }

    #[test]
    fn test_markdown_has_table() {
        let output = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# Resume Analysis Report"));
        assert!(output.contains("| Skills | 5.0 | 20 |"));
    }

    #[test]
    fn test_batch_formats_failures() {
        let batch = BatchReport {
            directory: "resumes".to_string(),
            entries: vec![
                BatchEntry::Analyzed(sample_report()),
                BatchEntry::Failed {
                    source: "broken.json".to_string(),
                    error: "invalid JSON".to_string(),
                },
            ],
        };

        let generator = ReportGenerator::with_options(false, false, true, false);
        let console = generator.generate_batch(&batch, OutputFormat::Console).unwrap();
        assert!(console.contains("Analyzed: 1 | Failed: 1"));
        assert!(console.contains("broken.json"));

        let json = generator.generate_batch(&batch, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][0]["status"], "analyzed");
        assert_eq!(value["entries"][1]["status"], "failed");
    }

    #[test]
    fn test_save_report_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# report");
    }
}
