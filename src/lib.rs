//! cvdesk
//!
//! A local-first editable résumé engine: six form-backed sections with a
//! view/edit draft discipline, hydrated from a durable key-value store at
//! startup, persisted by manual commit and a periodic autosave batch. All
//! durability is local-device storage; there is no server and no network
//! surface.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interface;

// Re-export common types
pub use application::autosave::{AutosaveScheduler, DEFAULT_AUTOSAVE_PERIOD};
pub use application::service::{CommitOutcome, Phase, ResumeService};
pub use application::SectionState;
pub use domain::resume::{keys, Resume, Section};
pub use domain::{ContactInfo, EducationEntry, PersonalInfo, ProjectEntry, SkillSet};
pub use error::{AppError, Result};
pub use infrastructure::storage::{FileStore, MemoryStore, StoreLatency};
pub use interface::DurableStore;
