//! Per-section raw scorers
//!
//! Each scorer returns exactly 0 for an empty section. Apart from skills,
//! every scorer clamps its result to the section weight it is given.

use crate::analysis::keywords::keyword_density;
use crate::analysis::profiles::{Industry, Section, WeightProfile};
use crate::analysis::record::{
    is_filled, is_present, EducationEntry, ExperienceEntry, Honors, PersonalInfo, ProjectEntry,
    ResumeRecord, Skill,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const EXPERIENCE_ENTRY_CEILING: f64 = 10.0;
pub const EDUCATION_ENTRY_CEILING: f64 = 10.0;
pub const PROJECT_ENTRY_CEILING: f64 = 8.0;

/// Skill-count breakpoints and the score each tier earns, highest first.
/// Coarse on purpose; keep the exact values for compatibility.
pub const SKILL_TIERS: [(usize, f64); 5] = [(15, 25.0), (10, 20.0), (7, 15.0), (5, 10.0), (3, 5.0)];

/// Summary word count is divided by this before capping
pub const SUMMARY_WORDS_PER_POINT: f64 = 10.0;
pub const SUMMARY_LENGTH_CAP: f64 = 5.0;
pub const SUMMARY_DENSITY_FACTOR: f64 = 3.0;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Raw score per section
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub personal_info: f64,
    pub experience: f64,
    pub education: f64,
    pub skills: f64,
    pub projects: f64,
    pub summary: f64,
}

impl SectionScores {
    pub fn get(&self, section: Section) -> f64 {
        match section {
            Section::PersonalInfo => self.personal_info,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Summary => self.summary,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, f64)> + '_ {
        Section::ALL.iter().map(move |section| (*section, self.get(*section)))
    }
}

/// Score every section of the resume against the given profile
pub fn score_sections(resume: &ResumeRecord, industry: Industry) -> SectionScores {
    let weights: &WeightProfile = industry.weights();

    SectionScores {
        personal_info: score_personal_info(&resume.personal_info, &resume.summary, weights.personal_info),
        experience: score_experience(&resume.experience, weights.experience),
        education: score_education(&resume.education, weights.education),
        skills: score_skills(&resume.skills),
        projects: score_projects(&resume.projects, weights.projects),
        summary: score_summary(&resume.summary, industry, weights.summary),
    }
}

fn clamp_to_weight(score: f64, weight: u32) -> f64 {
    score.clamp(0.0, weight as f64)
}

/// Micro-credits for each present, well-formed contact field
pub fn score_personal_info(info: &PersonalInfo, summary: &str, weight: u32) -> f64 {
    let mut score: f64 = 0.0;

    if is_filled(&info.first_name) {
        score += 2.0;
    }
    if is_filled(&info.last_name) {
        score += 2.0;
    }
    if is_valid_email(&info.email) {
        score += 3.0;
    }
    if is_filled(&info.phone) {
        score += 2.0;
    }
    if is_filled(&info.location) {
        score += 1.0;
    }
    if info.links.has_any() {
        score += 2.0;
    }
    if is_filled(&info.title) {
        score += 2.0;
    }
    if summary.trim().chars().count() > 50 {
        score += 1.0;
    }

    clamp_to_weight(score, weight)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

pub fn score_experience(entries: &[ExperienceEntry], weight: u32) -> f64 {
    let total: f64 = entries.iter().map(score_experience_entry).sum();
    clamp_to_weight(total, weight)
}

fn score_experience_entry(entry: &ExperienceEntry) -> f64 {
    let mut score: f64 = 2.0;

    if is_filled(&entry.position) && is_filled(&entry.company) {
        score += 2.0;
    }
    if entry.description.trim().chars().count() > 100 {
        score += 2.0;
    }
    if entry.achievements.iter().any(|a| is_filled(a)) {
        score += 2.0;
    }
    if is_present(&entry.start_date) && is_present(&entry.end_date) {
        score += 1.0;
    }
    if entry.technologies.iter().any(|t| is_filled(t)) {
        score += 1.0;
    }

    score.min(EXPERIENCE_ENTRY_CEILING)
}

pub fn score_education(entries: &[EducationEntry], weight: u32) -> f64 {
    let total: f64 = entries.iter().map(score_education_entry).sum();
    clamp_to_weight(total, weight)
}

fn score_education_entry(entry: &EducationEntry) -> f64 {
    let mut score: f64 = 3.0;

    if is_filled(&entry.degree) && is_filled(&entry.institution) {
        score += 3.0;
    }
    if entry.gpa.as_ref().and_then(|g| g.value()).is_some_and(|gpa| gpa >= 3.0) {
        score += 2.0;
    }
    if entry.honors.as_ref().is_some_and(Honors::is_present) {
        score += 1.0;
    }
    if entry.relevant_coursework.iter().any(|c| is_filled(c)) {
        score += 1.0;
    }

    score.min(EDUCATION_ENTRY_CEILING)
}

/// Step function on skill count. The tier value is reported unclamped;
/// the aggregator caps it at the skills weight.
pub fn score_skills(skills: &[Skill]) -> f64 {
    let count = skills.len();

    SKILL_TIERS
        .iter()
        .find(|(threshold, _)| count >= *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(0.0)
}

pub fn score_projects(entries: &[ProjectEntry], weight: u32) -> f64 {
    let total: f64 = entries.iter().map(score_project_entry).sum();
    clamp_to_weight(total, weight)
}

fn score_project_entry(entry: &ProjectEntry) -> f64 {
    let mut score: f64 = 2.0;

    if is_filled(&entry.name) && is_filled(&entry.description) {
        score += 2.0;
    }
    if entry.technologies.iter().any(|t| is_filled(t)) {
        score += 2.0;
    }
    if is_present(&entry.link) {
        score += 1.0;
    }
    if is_present(&entry.duration) {
        score += 1.0;
    }

    score.min(PROJECT_ENTRY_CEILING)
}

/// `min(words / 10, 5) + 3 * keyword density`, clamped to the weight
pub fn score_summary(summary: &str, industry: Industry, weight: u32) -> f64 {
    if summary.trim().is_empty() {
        return 0.0;
    }

    let word_count = summary.split_whitespace().count() as f64;
    let length_score = (word_count / SUMMARY_WORDS_PER_POINT).min(SUMMARY_LENGTH_CAP);
    let density_score = SUMMARY_DENSITY_FACTOR * keyword_density(summary, industry);

    clamp_to_weight(length_score + density_score, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::record::{Gpa, ProfessionalLinks};

    fn full_experience() -> ExperienceEntry {
        ExperienceEntry {
            position: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Designed and operated the payments platform, migrating legacy services to a \
                          horizontally scalable architecture."
                .to_string(),
            achievements: vec!["Cut p99 latency by 40%".to_string()],
            start_date: Some("2019-01".to_string()),
            end_date: Some("2023-06".to_string()),
            technologies: vec!["Rust".to_string()],
        }
    }

    fn skills(n: usize) -> Vec<Skill> {
        (0..n).map(|i| Skill::Name(format!("skill-{}", i))).collect()
    }

    #[test]
    fn test_empty_sections_score_zero() {
        let scores = score_sections(&ResumeRecord::default(), Industry::Default);
        for (section, score) in scores.iter() {
            assert_eq!(score, 0.0, "section {}", section);
        }
    }

    #[test]
    fn test_personal_info_credits() {
        let info = PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            location: "London".to_string(),
            links: ProfessionalLinks {
                github: Some("https://github.com/ada".to_string()),
                ..Default::default()
            },
            title: "Analyst".to_string(),
            industry: None,
        };
        let summary = "Mathematician with a long record of work on analytical engines and notes.";

        assert_eq!(score_personal_info(&info, summary, 15), 15.0);
        // Clamped to a smaller weight
        assert_eq!(score_personal_info(&info, summary, 10), 10.0);
        // Short summary loses one credit
        assert_eq!(score_personal_info(&info, "short", 15), 14.0);
    }

    #[test]
    fn test_invalid_email_earns_nothing() {
        assert!(is_valid_email("someone@example.org"));
        assert!(!is_valid_email("someone@example"));
        assert!(!is_valid_email("not an email@example.com"));
        assert!(!is_valid_email(""));

        let info = PersonalInfo {
            email: "broken@".to_string(),
            ..Default::default()
        };
        assert_eq!(score_personal_info(&info, "", 15), 0.0);
    }

    #[test]
    fn test_full_experience_entry_hits_ceiling() {
        assert_eq!(score_experience_entry(&full_experience()), EXPERIENCE_ENTRY_CEILING);
    }

    #[test]
    fn test_bare_experience_entry_gets_base_credit() {
        assert_eq!(score_experience(&[ExperienceEntry::default()], 30), 2.0);
    }

    #[test]
    fn test_experience_missing_end_date() {
        let mut entry = full_experience();
        entry.end_date = None;
        assert_eq!(score_experience_entry(&entry), 9.0);
    }

    #[test]
    fn test_experience_section_clamped_to_weight() {
        let entries = vec![full_experience(); 5];
        assert_eq!(score_experience(&entries, 30), 30.0);
        assert_eq!(score_experience(&entries[..2], 30), 20.0);
    }

    #[test]
    fn test_education_credits() {
        let entry = EducationEntry {
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            gpa: Some(Gpa::Number(3.5)),
            honors: Some(Honors::Text("Cum laude".to_string())),
            relevant_coursework: vec!["Compilers".to_string()],
        };
        assert_eq!(score_education(&[entry.clone()], 15), 10.0);

        let listed_honors = EducationEntry {
            honors: Some(Honors::List(vec!["Dean's List".to_string()])),
            ..entry.clone()
        };
        assert_eq!(score_education(&[listed_honors], 15), 10.0);

        let empty_honors = EducationEntry {
            honors: Some(Honors::List(Vec::new())),
            ..entry.clone()
        };
        assert_eq!(score_education(&[empty_honors], 15), 9.0);

        let low_gpa = EducationEntry {
            gpa: Some(Gpa::Number(2.9)),
            ..entry.clone()
        };
        assert_eq!(score_education(&[low_gpa], 15), 8.0);

        let garbage_gpa = EducationEntry {
            gpa: Some(Gpa::Text("n/a".to_string())),
            ..entry
        };
        assert_eq!(score_education(&[garbage_gpa], 15), 8.0);
    }

    #[test]
    fn test_skills_step_function() {
        assert_eq!(score_skills(&skills(0)), 0.0);
        assert_eq!(score_skills(&skills(2)), 0.0);
        assert_eq!(score_skills(&skills(3)), 5.0);
        assert_eq!(score_skills(&skills(5)), 10.0);
        assert_eq!(score_skills(&skills(7)), 15.0);
        assert_eq!(score_skills(&skills(10)), 20.0);
        assert_eq!(score_skills(&skills(14)), 20.0);
        assert_eq!(score_skills(&skills(15)), 25.0);
        assert_eq!(score_skills(&skills(60)), 25.0);
    }

    #[test]
    fn test_project_credits() {
        let entry = ProjectEntry {
            name: "resume-scorer".to_string(),
            description: "Scores resumes".to_string(),
            technologies: vec!["Rust".to_string()],
            link: Some("https://example.dev".to_string()),
            duration: Some("3 months".to_string()),
        };
        assert_eq!(score_projects(&[entry.clone()], 10), 8.0);
        assert_eq!(score_projects(&[entry.clone(), entry], 10), 10.0);
        assert_eq!(score_projects(&[ProjectEntry::default()], 10), 2.0);
    }

    #[test]
    fn test_summary_scoring() {
        assert_eq!(score_summary("", Industry::Tech, 10), 0.0);
        assert_eq!(score_summary("   ", Industry::Tech, 10), 0.0);

        // 20 words, no keywords: 20 / 10 = 2
        let text = vec!["word"; 20].join(" ");
        assert!((score_summary(&text, Industry::Default, 10) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_clamped_to_tech_weight() {
        let mut words = vec!["delivered"; 114];
        words.extend(["python", "rust", "docker", "kubernetes", "aws", "sql"]);
        let summary = words.join(" ");

        assert_eq!(summary.split_whitespace().count(), 120);
        assert_eq!(score_summary(&summary, Industry::Tech, 5), 5.0);
        // Under a roomier weight the density term shows: 5 + 3 * 6 / 120
        assert!((score_summary(&summary, Industry::Tech, 10) - 5.15).abs() < 1e-9);
    }
}
