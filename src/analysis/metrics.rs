//! Content metrics: word count and a rough readability estimate

use crate::analysis::record::ResumeRecord;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const READABILITY_BASE: i32 = 70;
const ACTION_VERBS: &[&str] = &[
    "achieved", "managed", "developed", "created", "improved", "increased", "reduced", "led",
    "implemented",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub word_count: usize,
    pub readability_score: u8,
}

pub fn content_metrics(resume: &ResumeRecord) -> ContentMetrics {
    ContentMetrics {
        word_count: word_count(resume),
        readability_score: readability_score(resume),
    }
}

/// Whitespace words in the summary and every experience description
pub fn word_count(resume: &ResumeRecord) -> usize {
    let summary_words = resume.summary.split_whitespace().count();
    let experience_words: usize = resume
        .experience
        .iter()
        .map(|e| e.description.split_whitespace().count())
        .sum();

    summary_words + experience_words
}

/// Heuristic 0-100 readability: shorter summary sentences and a variety
/// of action verbs score higher.
pub fn readability_score(resume: &ResumeRecord) -> u8 {
    let mut score = READABILITY_BASE;

    if !resume.summary.trim().is_empty() {
        let sentences = resume
            .summary
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);
        let words = resume.summary.split_whitespace().count();
        let avg_sentence_length = words as f64 / sentences as f64;

        if avg_sentence_length > 25.0 {
            score -= 10;
        }
        if avg_sentence_length < 15.0 {
            score += 5;
        }
    }

    let verbs = distinct_action_verbs(resume);
    if verbs >= 3 {
        score += 15;
    }
    if verbs >= 5 {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

fn distinct_action_verbs(resume: &ResumeRecord) -> usize {
    let text = resume_text(resume).to_lowercase();
    let words: std::collections::HashSet<&str> = text.unicode_words().collect();

    ACTION_VERBS.iter().filter(|verb| words.contains(*verb)).count()
}

/// All free text of the resume, space separated
fn resume_text(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = vec![resume.personal_info.title.as_str(), resume.summary.as_str()];

    for entry in &resume.experience {
        parts.push(&entry.position);
        parts.push(&entry.description);
        parts.extend(entry.achievements.iter().map(String::as_str));
    }
    for project in &resume.projects {
        parts.push(&project.description);
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::record::ExperienceEntry;

    #[test]
    fn test_empty_resume_metrics() {
        let metrics = content_metrics(&ResumeRecord::default());
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.readability_score, 70);
    }

    #[test]
    fn test_word_count_covers_summary_and_descriptions() {
        let mut resume = ResumeRecord::default();
        resume.summary = "Seasoned platform engineer".to_string();
        resume.experience.push(ExperienceEntry {
            description: "Ran the on-call rotation".to_string(),
            ..Default::default()
        });
        assert_eq!(word_count(&resume), 7);
    }

    #[test]
    fn test_short_sentences_and_verbs_raise_readability() {
        let mut resume = ResumeRecord::default();
        resume.summary = "Led a team of five. Developed billing systems.".to_string();
        resume.experience.push(ExperienceEntry {
            description: "Managed releases and improved uptime".to_string(),
            achievements: vec!["Reduced costs by 20%".to_string()],
            ..Default::default()
        });

        // 70 + 5 (short sentences) + 15 (>= 3 verbs) + 10 (>= 5 verbs)
        assert_eq!(readability_score(&resume), 100);
    }

    #[test]
    fn test_long_sentences_lower_readability() {
        let mut resume = ResumeRecord::default();
        resume.summary = vec!["word"; 30].join(" ");
        assert_eq!(readability_score(&resume), 60);
    }
}
