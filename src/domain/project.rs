//! Projects section: an ordered list of project entries with a keyword search
//! helper for the view-mode filter box.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Dated;

/// A single project entry.
///
/// `technologies` is a free-form comma-separated tag string, exactly as the
/// user typed it; `technology_tags` derives the cleaned-up tag list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub url: Option<String>,
    pub start_date: NaiveDate,
}

impl ProjectEntry {
    /// Create a new entry with a fresh unique id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: impl Into<String>,
        url: Option<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            technologies: technologies.into(),
            url,
            start_date,
        }
    }

    /// Split the comma-separated technology string into trimmed, non-empty tags.
    pub fn technology_tags(&self) -> Vec<String> {
        self.technologies
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

impl Dated for ProjectEntry {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// Case-insensitive keyword filter over project title and description.
///
/// An empty keyword matches everything.
pub fn filter_by_keyword(items: &[ProjectEntry], keyword: &str) -> Vec<ProjectEntry> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&keyword)
                || item.description.to_lowercase().contains(&keyword)
        })
        .cloned()
        .collect()
}

/// First-run seed: a single placeholder project.
pub fn default_projects() -> Vec<ProjectEntry> {
    vec![ProjectEntry {
        id: "1".to_string(),
        title: "E-commerce Platform".to_string(),
        description: "Full e-commerce platform with an integrated payment system.".to_string(),
        technologies: "React, Node.js, MongoDB, Stripe".to_string(),
        url: Some("https://github.com/user/ecommerce".to_string()),
        start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }]
}
