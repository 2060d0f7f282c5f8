//! Industry weight profiles and keyword tables
//!
//! Profiles are fixed constants. Revising a table means bumping
//! [`PROFILE_TABLE_VERSION`] so stored analyses can be told apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the weight and keyword tables below
pub const PROFILE_TABLE_VERSION: u32 = 1;

/// Resume sections that receive a raw score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Projects,
    Summary,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::PersonalInfo,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Summary,
    ];

    /// Key used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "personalInfo",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Summary => "summary",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "Personal Info",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Summary => "Summary",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Recognized industry tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Business,
    Design,
    Academic,
    Default,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Tech,
        Industry::Business,
        Industry::Design,
        Industry::Academic,
        Industry::Default,
    ];

    /// Resolve an industry tag. Unknown or absent tags fall back to `Default`.
    pub fn resolve(tag: Option<&str>) -> Self {
        let resolved = match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("tech") => Industry::Tech,
            Some("business") => Industry::Business,
            Some("design") => Industry::Design,
            Some("academic") => Industry::Academic,
            _ => Industry::Default,
        };
        log::debug!("Resolved industry tag {:?} to profile '{}'", tag, resolved);
        resolved
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Business => "business",
            Industry::Design => "design",
            Industry::Academic => "academic",
            Industry::Default => "default",
        }
    }

    /// Weight profile for this industry
    pub fn weights(&self) -> &'static WeightProfile {
        match self {
            Industry::Tech => &TECH_WEIGHTS,
            Industry::Business => &BUSINESS_WEIGHTS,
            Industry::Design => &DESIGN_WEIGHTS,
            Industry::Academic => &ACADEMIC_WEIGHTS,
            Industry::Default => &DEFAULT_WEIGHTS,
        }
    }

    /// Keywords counted by the density analyzer. `Default` has none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Industry::Tech => TECH_KEYWORDS,
            Industry::Business => BUSINESS_KEYWORDS,
            Industry::Design => DESIGN_KEYWORDS,
            Industry::Academic => ACADEMIC_KEYWORDS,
            Industry::Default => &[],
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Maximum attainable points per section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightProfile {
    pub personal_info: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
    pub projects: u32,
    pub summary: u32,
}

impl WeightProfile {
    pub fn weight(&self, section: Section) -> u32 {
        match section {
            Section::PersonalInfo => self.personal_info,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Summary => self.summary,
        }
    }

    /// Sum of all section weights: the highest score reachable before bonuses
    pub fn total(&self) -> u32 {
        Section::ALL.iter().map(|s| self.weight(*s)).sum()
    }
}

pub const DEFAULT_WEIGHTS: WeightProfile = WeightProfile {
    personal_info: 15,
    experience: 30,
    education: 15,
    skills: 20,
    projects: 10,
    summary: 10,
};

pub const TECH_WEIGHTS: WeightProfile = WeightProfile {
    personal_info: 10,
    experience: 30,
    education: 10,
    skills: 30,
    projects: 15,
    summary: 5,
};

pub const BUSINESS_WEIGHTS: WeightProfile = WeightProfile {
    personal_info: 15,
    experience: 35,
    education: 15,
    skills: 15,
    projects: 5,
    summary: 15,
};

pub const DESIGN_WEIGHTS: WeightProfile = WeightProfile {
    personal_info: 15,
    experience: 25,
    education: 10,
    skills: 20,
    projects: 25,
    summary: 5,
};

pub const ACADEMIC_WEIGHTS: WeightProfile = WeightProfile {
    personal_info: 10,
    experience: 20,
    education: 35,
    skills: 15,
    projects: 10,
    summary: 10,
};

const TECH_KEYWORDS: &[&str] = &[
    "javascript", "typescript", "python", "java", "rust", "go", "react", "node.js",
    "api", "sql", "aws", "azure", "docker", "kubernetes", "microservices", "cloud",
    "devops", "agile", "git", "database", "backend", "frontend", "machine learning",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "strategy", "management", "leadership", "revenue", "growth", "sales", "marketing",
    "operations", "stakeholder", "stakeholders", "budget", "analytics", "negotiation",
    "roi", "kpi", "forecasting", "partnerships",
];

const DESIGN_KEYWORDS: &[&str] = &[
    "design", "ui", "ux", "figma", "sketch", "prototype", "prototyping", "wireframe",
    "wireframes", "typography", "branding", "adobe", "illustrator", "photoshop",
    "user research", "visual", "accessibility",
];

const ACADEMIC_KEYWORDS: &[&str] = &[
    "research", "publication", "publications", "teaching", "curriculum", "grant",
    "thesis", "dissertation", "peer review", "conference", "laboratory", "methodology",
    "journal", "fellowship",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_sums_to_100() {
        for industry in Industry::ALL {
            assert_eq!(industry.weights().total(), 100, "profile {}", industry);
        }
    }

    #[test]
    fn test_resolve_known_tags() {
        assert_eq!(Industry::resolve(Some("tech")), Industry::Tech);
        assert_eq!(Industry::resolve(Some("business")), Industry::Business);
        assert_eq!(Industry::resolve(Some("design")), Industry::Design);
        assert_eq!(Industry::resolve(Some("academic")), Industry::Academic);
        assert_eq!(Industry::resolve(Some("default")), Industry::Default);
        assert_eq!(Industry::resolve(Some(" Tech ")), Industry::Tech);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Industry::resolve(None), Industry::Default);
        assert_eq!(Industry::resolve(Some("")), Industry::Default);
        assert_eq!(Industry::resolve(Some("healthcare")), Industry::Default);
        assert!(Industry::Default.keywords().is_empty());
    }

    #[test]
    fn test_profile_constants_used_by_scenarios() {
        assert_eq!(DEFAULT_WEIGHTS.weight(Section::Skills), 20);
        assert_eq!(TECH_WEIGHTS.weight(Section::Experience), 30);
        assert_eq!(TECH_WEIGHTS.weight(Section::Summary), 5);
    }

    #[test]
    fn test_keyword_tables_are_lowercase() {
        for industry in Industry::ALL {
            for keyword in industry.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
