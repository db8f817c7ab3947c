//! Domain model for the résumé sections.
//!
//! Each section is an independently persisted entity; the `Resume` aggregate
//! groups the six of them for hydration and autosave snapshots.

pub mod contact;
pub mod education;
pub mod profile;
pub mod project;
pub mod resume;
pub mod skills;

pub use contact::ContactInfo;
pub use education::EducationEntry;
pub use profile::PersonalInfo;
pub use project::ProjectEntry;
pub use resume::{Resume, Section};
pub use skills::SkillSet;

use chrono::NaiveDate;

/// Entries that carry a start date and can be ordered on a timeline.
pub trait Dated {
    fn start_date(&self) -> NaiveDate;
}

/// Return a copy of `items` ordered newest-first by start date.
///
/// Display ordering only; the stored list keeps insertion order.
pub fn sorted_newest_first<T: Dated + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.start_date().cmp(&a.start_date()));
    sorted
}

/// Format a date as month + year for timeline display, e.g. "January 2023".
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Format an optional end date, falling back to "Present" for ongoing entries.
pub fn format_end_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format_month_year(d),
        None => "Present".to_string(),
    }
}
