//! Single-resume analysis: resolve the profile, score the sections,
//! aggregate, then derive recommendations, tiers and keywords.

use crate::analysis::aggregator::aggregate;
use crate::analysis::classifier::{improvement_areas, strengths, weaknesses, ImprovementArea};
use crate::analysis::keywords::extract_keywords;
use crate::analysis::metrics::{content_metrics, ContentMetrics};
use crate::analysis::profiles::{Industry, Section, PROFILE_TABLE_VERSION};
use crate::analysis::recommendations::{generate_recommendations, Recommendation};
use crate::analysis::record::ResumeRecord;
use crate::analysis::scorers::{score_sections, SectionScores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of analyzing one resume. Built fresh on every call and never
/// updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Quality score, 0-100
    pub total: u8,
    pub breakdown: SectionScores,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<Section>,
    pub weaknesses: Vec<Section>,
    pub improvement_areas: Vec<ImprovementArea>,
    pub keywords: Vec<String>,
    /// Profile actually used, after fallback
    pub industry: Industry,
    pub metrics: ContentMetrics,
    pub profile_version: u32,
    pub last_analyzed: DateTime<Utc>,
}

/// Analyze a resume, stamping the result with the current time
pub fn analyze(resume: &ResumeRecord) -> Analysis {
    analyze_at(resume, Utc::now())
}

/// Analyze a resume with an explicit timestamp
pub fn analyze_at(resume: &ResumeRecord, analyzed_at: DateTime<Utc>) -> Analysis {
    let industry = Industry::resolve(resume.industry());
    let weights = industry.weights();

    let breakdown = score_sections(resume, industry);
    let total = aggregate(&breakdown, weights, resume);

    log::debug!(
        "Analyzed resume with profile '{}': total {} ({:?})",
        industry,
        total,
        breakdown
    );

    Analysis {
        total,
        breakdown,
        recommendations: generate_recommendations(&breakdown, weights),
        strengths: strengths(&breakdown),
        weaknesses: weaknesses(&breakdown),
        improvement_areas: improvement_areas(&breakdown, weights),
        keywords: extract_keywords(resume),
        industry,
        metrics: content_metrics(resume),
        profile_version: PROFILE_TABLE_VERSION,
        last_analyzed: analyzed_at,
    }
}
