//! Strength / weakness tiers and improvement areas

use crate::analysis::profiles::{Section, WeightProfile};
use crate::analysis::scorers::SectionScores;
use serde::{Deserialize, Serialize};

/// Raw scores above this are strengths, regardless of weight
pub const STRENGTH_THRESHOLD: f64 = 8.0;
/// Raw scores below this are weaknesses, regardless of weight
pub const WEAKNESS_THRESHOLD: f64 = 4.0;
/// Sections under this percentage of their weight need improvement
pub const IMPROVEMENT_PERCENTAGE: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementArea {
    pub section: Section,
    pub current_score: f64,
    pub max_possible: u32,
    pub percentage: u32,
}

pub fn strengths(scores: &SectionScores) -> Vec<Section> {
    scores
        .iter()
        .filter(|(_, score)| *score > STRENGTH_THRESHOLD)
        .map(|(section, _)| section)
        .collect()
}

pub fn weaknesses(scores: &SectionScores) -> Vec<Section> {
    scores
        .iter()
        .filter(|(_, score)| *score < WEAKNESS_THRESHOLD)
        .map(|(section, _)| section)
        .collect()
}

/// Weighted sections below 60% of their weight, worst first
pub fn improvement_areas(scores: &SectionScores, weights: &WeightProfile) -> Vec<ImprovementArea> {
    let mut areas: Vec<ImprovementArea> = scores
        .iter()
        .filter_map(|(section, score)| {
            let weight = weights.weight(section);
            if weight == 0 {
                return None;
            }
            let percentage = (100.0 * score / weight as f64).round().max(0.0) as u32;
            (percentage < IMPROVEMENT_PERCENTAGE).then_some(ImprovementArea {
                section,
                current_score: score,
                max_possible: weight,
                percentage,
            })
        })
        .collect();

    // stable: ties keep section order
    areas.sort_by_key(|area| area.percentage);
    areas
}
