//! Education section: an ordered list of degree/course entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Dated;

/// A single education entry on the résumé timeline.
///
/// Ids are generated once at creation and never reused after removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl EducationEntry {
    /// Create a new entry with a fresh unique id.
    pub fn new(
        title: impl Into<String>,
        institution: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            institution: institution.into(),
            start_date,
            end_date,
            description: description.into(),
        }
    }
}

impl Dated for EducationEntry {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// First-run seed: a single placeholder degree.
pub fn default_education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        id: "1".to_string(),
        title: "Software Development and Management Engineering".to_string(),
        institution: "Technological University".to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 5, 1),
        description: "Specialization in software development and systems architecture."
            .to_string(),
    }]
}
