//! Prioritized improvement recommendations for weak sections

use crate::analysis::profiles::{Section, WeightProfile};
use crate::analysis::scorers::SectionScores;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sections scoring below this share of their weight get a recommendation
pub const WEAK_RATIO: f64 = 0.6;

pub const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Experience,
    Skills,
    Summary,
    Education,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

struct Rule {
    section: Section,
    kind: RecommendationKind,
    priority: Priority,
    message: &'static str,
    action: &'static str,
}

/// Checked in this order; output order follows it
const RULES: [Rule; 4] = [
    Rule {
        section: Section::Experience,
        kind: RecommendationKind::Experience,
        priority: Priority::High,
        message: "Strengthen your work experience with detailed descriptions and measurable achievements",
        action: "Add quantified accomplishments, dates and technologies to each role",
    },
    Rule {
        section: Section::Skills,
        kind: RecommendationKind::Skills,
        priority: Priority::Medium,
        message: "Expand your skills section with more relevant technical and soft skills",
        action: "List at least 10 skills that match the roles you are targeting",
    },
    Rule {
        section: Section::Summary,
        kind: RecommendationKind::Summary,
        priority: Priority::High,
        message: "Write a compelling professional summary that uses industry keywords",
        action: "Write 3-5 sentences covering your expertise, key results and career goals",
    },
    Rule {
        section: Section::Education,
        kind: RecommendationKind::Education,
        priority: Priority::Medium,
        message: "Add more detail to your education history",
        action: "Include degree, institution, GPA (if 3.0 or higher), honors and relevant coursework",
    },
];

/// Emit one recommendation per weak checked section, or a single
/// low-priority "excellent" entry when none are weak.
pub fn generate_recommendations(scores: &SectionScores, weights: &WeightProfile) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| {
            let weight = weights.weight(rule.section);
            weight > 0 && scores.get(rule.section) / (weight as f64) < WEAK_RATIO
        })
        .map(|rule| Recommendation {
            kind: rule.kind,
            priority: rule.priority,
            message: rule.message.to_string(),
            action: rule.action.to_string(),
        })
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Excellent,
            priority: Priority::Low,
            message: "Your resume is well balanced across all key sections".to_string(),
            action: "Tailor your keywords to each job description before applying".to_string(),
        });
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
