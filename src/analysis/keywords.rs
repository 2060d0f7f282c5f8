//! Industry keyword density and search keyword extraction

use crate::analysis::profiles::Industry;
use crate::analysis::record::ResumeRecord;
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Upper bound on extracted keywords
pub const MAX_KEYWORDS: usize = 15;

/// One case-insensitive matcher per industry with a non-empty keyword list
static INDUSTRY_MATCHERS: Lazy<HashMap<Industry, AhoCorasick>> = Lazy::new(|| {
    Industry::ALL
        .iter()
        .filter(|industry| !industry.keywords().is_empty())
        .filter_map(|industry| {
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(industry.keywords())
                .map_err(|e| log::warn!("Failed to build keyword matcher for '{}': {}", industry, e))
                .ok()
                .map(|matcher| (*industry, matcher))
        })
        .collect()
});

static SUMMARY_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w{5,}\b").expect("Invalid summary word regex"));

/// Count whole-word, case-insensitive occurrences of the industry's keywords.
///
/// Every keyword is counted independently, so "machine learning" and a
/// standalone "learning" keyword would both match the same phrase.
pub fn count_keyword_occurrences(text: &str, industry: Industry) -> usize {
    let Some(matcher) = INDUSTRY_MATCHERS.get(&industry) else {
        return 0;
    };

    matcher
        .find_overlapping_iter(text)
        .filter(|m| is_whole_word(text, m.start(), m.end()))
        .count()
}

/// Keyword occurrences divided by the whitespace word count; 0 for empty text
pub fn keyword_density(text: &str, industry: Industry) -> f64 {
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return 0.0;
    }

    count_keyword_occurrences(text, industry) as f64 / word_count as f64
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';

    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));

    before_ok && after_ok
}

/// Pull search/tagging terms from the title, summary and skills.
///
/// Title words longer than 3 characters come first, then summary words of
/// 5+ word characters, then skill-name words of 3+ characters. Terms are
/// lowercased, deduplicated in insertion order and capped at [`MAX_KEYWORDS`].
pub fn extract_keywords(resume: &ResumeRecord) -> Vec<String> {
    let title_words = resume
        .personal_info
        .title
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(str::to_lowercase);

    let summary_lower = resume.summary.to_lowercase();
    let summary_words = SUMMARY_WORD
        .find_iter(&summary_lower)
        .map(|m| m.as_str().to_string())
        .collect::<Vec<_>>();

    let skill_words = resume.skills.iter().flat_map(|skill| {
        skill
            .name()
            .split_whitespace()
            .filter(|w| w.chars().count() >= 3)
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
    });

    let mut seen = HashSet::new();
    title_words
        .chain(summary_words)
        .chain(skill_words)
        .filter(|word| seen.insert(word.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}
