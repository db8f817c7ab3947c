pub mod autosave;
pub mod section;
pub mod service;

pub use autosave::AutosaveScheduler;
pub use section::SectionState;
pub use service::{CommitOutcome, ResumeService};
