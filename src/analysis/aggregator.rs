//! Weighted aggregation of section scores into the 0-100 total

use crate::analysis::profiles::WeightProfile;
use crate::analysis::record::ResumeRecord;
use crate::analysis::scorers::SectionScores;

pub const MAX_TOTAL: u8 = 100;

pub const CERTIFICATIONS_BONUS: u8 = 5;
pub const LANGUAGES_BONUS: u8 = 3;
pub const REFERENCES_BONUS: u8 = 2;

/// `round(100 * sum(scores) / sum(weights))`, each score first capped at
/// its section weight. Returns 0 when the profile has no weight at all.
pub fn weighted_total(scores: &SectionScores, weights: &WeightProfile) -> u8 {
    let weight_sum = weights.total();
    if weight_sum == 0 {
        return 0;
    }

    let score_sum: f64 = scores
        .iter()
        .map(|(section, score)| score.clamp(0.0, weights.weight(section) as f64))
        .sum();

    let total = (100.0 * score_sum / weight_sum as f64).round();
    total.clamp(0.0, MAX_TOTAL as f64) as u8
}

/// Saturating optional-section bonuses, in fixed order:
/// certifications, then more than one language, then references.
pub fn apply_bonuses(total: u8, resume: &ResumeRecord) -> u8 {
    let bonuses = [
        (!resume.certifications.is_empty(), CERTIFICATIONS_BONUS),
        (resume.languages.len() > 1, LANGUAGES_BONUS),
        (!resume.references.is_empty(), REFERENCES_BONUS),
    ];

    bonuses
        .iter()
        .filter(|(earned, _)| *earned)
        .fold(total.min(MAX_TOTAL), |acc, (_, bonus)| acc.saturating_add(*bonus).min(MAX_TOTAL))
}

/// Final score: weighted total plus bonuses
pub fn aggregate(scores: &SectionScores, weights: &WeightProfile, resume: &ResumeRecord) -> u8 {
    let base = weighted_total(scores, weights);
    let total = apply_bonuses(base, resume);
    log::debug!("Aggregated total: base {} -> {} after bonuses", base, total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::profiles::{DEFAULT_WEIGHTS, TECH_WEIGHTS};
    use serde_json::json;

    fn with_extras(certs: usize, languages: usize, references: usize) -> ResumeRecord {
        ResumeRecord {
            certifications: vec![json!("AWS SA"); certs],
            languages: vec![json!("English"); languages],
            references: vec![json!({"name": "Grace"}); references],
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_scores_total_zero() {
        assert_eq!(weighted_total(&SectionScores::default(), &DEFAULT_WEIGHTS), 0);
    }

    #[test]
    fn test_zero_weight_profile() {
        let empty = WeightProfile {
            personal_info: 0,
            experience: 0,
            education: 0,
            skills: 0,
            projects: 0,
            summary: 0,
        };
        let scores = SectionScores {
            skills: 25.0,
            ..Default::default()
        };
        assert_eq!(weighted_total(&scores, &empty), 0);
    }

    #[test]
    fn test_full_marks_total_100() {
        let scores = SectionScores {
            personal_info: 10.0,
            experience: 30.0,
            education: 10.0,
            skills: 30.0,
            projects: 15.0,
            summary: 5.0,
        };
        assert_eq!(weighted_total(&scores, &TECH_WEIGHTS), 100);
    }

    #[test]
    fn test_skills_capped_at_weight_before_summing() {
        // 25 skill points against a 20-point default weight count as 20
        let scores = SectionScores {
            skills: 25.0,
            ..Default::default()
        };
        assert_eq!(weighted_total(&scores, &DEFAULT_WEIGHTS), 20);
    }

    #[test]
    fn test_skills_only_profile_normalizes_to_100() {
        let skills_only = WeightProfile {
            personal_info: 0,
            experience: 0,
            education: 0,
            skills: DEFAULT_WEIGHTS.skills,
            projects: 0,
            summary: 0,
        };
        let scores = SectionScores {
            skills: 25.0,
            ..Default::default()
        };
        // clamped to 20, then 100 * 20 / 20
        assert_eq!(weighted_total(&scores, &skills_only), 100);
    }

    #[test]
    fn test_rounding() {
        let scores = SectionScores {
            summary: 5.15,
            experience: 20.0,
            ..Default::default()
        };
        // 25.15 / 100 -> 25
        assert_eq!(weighted_total(&scores, &DEFAULT_WEIGHTS), 25);

        let scores = SectionScores {
            summary: 5.5,
            ..Default::default()
        };
        assert_eq!(weighted_total(&scores, &DEFAULT_WEIGHTS), 6);
    }

    #[test]
    fn test_bonuses_in_order() {
        assert_eq!(apply_bonuses(50, &with_extras(0, 0, 0)), 50);
        assert_eq!(apply_bonuses(50, &with_extras(1, 0, 0)), 55);
        assert_eq!(apply_bonuses(50, &with_extras(0, 1, 0)), 50);
        assert_eq!(apply_bonuses(50, &with_extras(0, 2, 0)), 53);
        assert_eq!(apply_bonuses(50, &with_extras(0, 0, 1)), 52);
        assert_eq!(apply_bonuses(50, &with_extras(2, 3, 1)), 60);
    }

    #[test]
    fn test_bonuses_saturate() {
        assert_eq!(apply_bonuses(97, &with_extras(1, 2, 1)), 100);
        assert_eq!(apply_bonuses(100, &with_extras(1, 2, 1)), 100);
        assert_eq!(apply_bonuses(u8::MAX, &with_extras(1, 2, 1)), 100);
    }
}
