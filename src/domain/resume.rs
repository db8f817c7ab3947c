//! The résumé aggregate and the per-section store keys.

use serde::{Deserialize, Serialize};

use super::contact::ContactInfo;
use super::education::{default_education, EducationEntry};
use super::profile::PersonalInfo;
use super::project::{default_projects, ProjectEntry};
use super::skills::SkillSet;

/// Store keys, one per section. These are the exact strings used in the
/// durable store and must not change between runs.
pub mod keys {
    pub const PERSONAL_INFO: &str = "personalInfo";
    pub const ABOUT: &str = "about";
    pub const EDUCATION: &str = "education";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const CONTACT_INFO: &str = "contactInfo";
}

/// The six editable résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PersonalInfo,
    About,
    Education,
    Projects,
    Skills,
    ContactInfo,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 6] = [
        Section::PersonalInfo,
        Section::About,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::ContactInfo,
    ];

    /// The durable-store key for this section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::PersonalInfo => keys::PERSONAL_INFO,
            Section::About => keys::ABOUT,
            Section::Education => keys::EDUCATION,
            Section::Projects => keys::PROJECTS,
            Section::Skills => keys::SKILLS,
            Section::ContactInfo => keys::CONTACT_INFO,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A full résumé: the authoritative value of every section.
///
/// Used as the hydration result and as the autosave snapshot; the live
/// application state wraps each field in its own draft-capable container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub about: String,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillSet,
    pub contact_info: ContactInfo,
}

impl Default for Resume {
    /// The hard-coded first-run résumé, used when the store is empty.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            about: default_about(),
            education: default_education(),
            projects: default_projects(),
            skills: SkillSet::default(),
            contact_info: ContactInfo::default(),
        }
    }
}

/// First-run seed for the about section.
pub fn default_about() -> String {
    "Describe your professional experience and goals.".to_string()
}
