//! Resume record structures consumed by the scoring engine
//!
//! Every field is optional. A missing or `null` field deserializes to its
//! empty value and scores zero; nothing in here can make an analysis fail.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    /// Presence-only signals: their content is never inspected.
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub links: ProfessionalLinks,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfessionalLinks {
    /// True when at least one link carries non-blank text
    pub fn has_any(&self) -> bool {
        [&self.linkedin, &self.github, &self.portfolio]
            .iter()
            .any(|link| link.as_deref().is_some_and(|l| !l.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(alias = "title", deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    pub gpa: Option<Gpa>,
    pub honors: Option<Honors>,
    #[serde(alias = "relevantCourses", deserialize_with = "null_as_default")]
    pub relevant_coursework: Vec<String>,
}

/// GPA as entered by the user: either a number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gpa {
    Number(f64),
    Text(String),
}

impl Gpa {
    /// Numeric value, if one can be read. `"3.6/4.0"` reads as 3.6;
    /// anything non-numeric is treated as absent.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Gpa::Number(n) => *n,
            Gpa::Text(text) => text.split('/').next()?.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Honors as a single line or as a list of distinctions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Honors {
    Text(String),
    List(Vec<String>),
}

impl Honors {
    /// True when at least one non-blank distinction is listed
    pub fn is_present(&self) -> bool {
        match self {
            Honors::Text(text) => is_filled(text),
            Honors::List(items) => items.iter().any(|item| is_filled(item)),
        }
    }
}

/// Skills arrive either as bare strings or as `{ name, level }` objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skill {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        level: Option<String>,
    },
}

impl Skill {
    pub fn name(&self) -> &str {
        match self {
            Skill::Name(name) => name,
            Skill::Detailed { name, .. } => name,
        }
    }
}

impl From<&str> for Skill {
    fn from(name: &str) -> Self {
        Skill::Name(name.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(alias = "title", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub duration: Option<String>,
}

impl ResumeRecord {
    /// Industry tag declared in the personal info block, if any
    pub fn industry(&self) -> Option<&str> {
        self.personal_info.industry.as_deref()
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Presence check for optional free-text fields
pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Presence check for required-but-possibly-empty text fields
pub(crate) fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
