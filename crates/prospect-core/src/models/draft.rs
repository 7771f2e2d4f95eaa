//! Sparse extraction output. Both extraction backends (heuristic and LLM)
//! produce a [`PartialProfile`]; the merge step turns drafts into canonical
//! entries and allocates identifiers. The extractors themselves never
//! allocate IDs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::{
    AchievementEntry, EducationEntry, ExperienceEntry, ProjectEntry,
};

/// End-date sentinel for a position the candidate still holds.
pub const PRESENT_SENTINEL: &str = "Present";

/// Best-effort structured extraction result. A scalar the extractor could
/// not confidently identify is `None`, never a guess; list fields default
/// to empty so a JSON body with missing arrays deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub desired_role: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceDraft>,
    pub education: Vec<EducationDraft>,
    pub projects: Vec<ProjectDraft>,
    pub achievements: Vec<AchievementDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub id: Option<Uuid>,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationDraft {
    pub id: Option<Uuid>,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub date: String,
}

impl ExperienceDraft {
    pub fn into_entry(self, id: Uuid) -> ExperienceEntry {
        ExperienceEntry {
            id,
            company: self.company,
            role: self.role,
            start_date: self.start_date,
            end_date: self.end_date,
            current: self.current,
            description: self.description,
            technologies: self.technologies,
        }
    }
}

impl EducationDraft {
    pub fn into_entry(self, id: Uuid) -> EducationEntry {
        EducationEntry {
            id,
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            start_date: self.start_date,
            end_date: self.end_date,
            grade: self.grade,
        }
    }
}

impl ProjectDraft {
    pub fn into_entry(self, id: Uuid) -> ProjectEntry {
        ProjectEntry {
            id,
            name: self.name,
            description: self.description,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
        }
    }
}

impl AchievementDraft {
    pub fn into_entry(self, id: Uuid) -> AchievementEntry {
        AchievementEntry {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
        }
    }
}
