//! Structural completion percentage
//!
//! Coarser than the quality score: it only asks whether each section has
//! "enough" content, never how good that content is.

use crate::analysis::record::{is_filled, ResumeRecord};

const CHECK_COUNT: usize = 8;

/// Percentage of the eight completion checks the resume passes
pub fn progress(resume: &ResumeRecord) -> u8 {
    let info = &resume.personal_info;

    let checks: [bool; CHECK_COUNT] = [
        is_filled(&info.first_name) && is_filled(&info.last_name) && is_filled(&info.email),
        resume.summary.trim().chars().count() > 50,
        !resume.experience.is_empty(),
        !resume.education.is_empty(),
        resume.skills.len() >= 5,
        !resume.projects.is_empty(),
        !resume.certifications.is_empty(),
        !resume.languages.is_empty(),
    ];

    let completed = checks.iter().filter(|passed| **passed).count();
    (100.0 * completed as f64 / CHECK_COUNT as f64).round() as u8
}
