//! The résumé controller.
//!
//! `ResumeService` owns the durable store and one application-state aggregate
//! holding every section's draft-capable container, the global lifecycle
//! phase and the last-saved timestamp. A Section Editor UI consumes it as
//! `{ current value, begin_edit, draft mutation, commit, discard }` per
//! section.

use chrono::{DateTime, Local};
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::section::SectionState;
use crate::domain::resume::{keys, Resume, Section};
use crate::domain::{ContactInfo, EducationEntry, PersonalInfo, ProjectEntry, SkillSet};
use crate::error::{AppError, Result};
use crate::interface::{load_typed, save_typed, DurableStore};

/// Global lifecycle phase. Edits and autosave are inert until `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hydration in flight; nothing is rendered or editable.
    Loading,
    /// All sections hydrated; normal operation.
    Ready,
}

/// Result of a manual commit.
///
/// The draft is always applied locally; `persisted` reports whether the
/// write-through to the durable store actually succeeded, so a stricter
/// caller can retry or warn instead of trusting the optimistic apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub persisted: bool,
}

/// The application-state aggregate: one named field per section instead of
/// scattered globals.
struct AppState {
    phase: Phase,
    personal_info: SectionState<PersonalInfo>,
    about: SectionState<String>,
    education: SectionState<Vec<EducationEntry>>,
    projects: SectionState<Vec<ProjectEntry>>,
    skills: SectionState<SkillSet>,
    contact_info: SectionState<ContactInfo>,
    last_saved: Option<DateTime<Local>>,
}

impl AppState {
    fn from_resume(resume: Resume, phase: Phase) -> Self {
        Self {
            phase,
            personal_info: SectionState::new(resume.personal_info),
            about: SectionState::new(resume.about),
            education: SectionState::new(resume.education),
            projects: SectionState::new(resume.projects),
            skills: SectionState::new(resume.skills),
            contact_info: SectionState::new(resume.contact_info),
            last_saved: None,
        }
    }

    /// Clone the authoritative value of every section. Drafts are never part
    /// of a snapshot.
    fn snapshot(&self) -> Resume {
        Resume {
            personal_info: self.personal_info.value().clone(),
            about: self.about.value().clone(),
            education: self.education.value().clone(),
            projects: self.projects.value().clone(),
            skills: self.skills.value().clone(),
            contact_info: self.contact_info.value().clone(),
        }
    }
}

/// High-level résumé state service integrating hydration, draft lifecycle,
/// manual commit and the autosave batch body.
#[derive(Clone)]
pub struct ResumeService {
    store: Arc<dyn DurableStore>,
    state: Arc<RwLock<AppState>>,
}

impl ResumeService {
    /// Create a service over `store`, starting in the `Loading` phase with
    /// default values until `hydrate` completes.
    pub fn new(store: Arc<dyn DurableStore>) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(AppState::from_resume(
                Resume::default(),
                Phase::Loading,
            ))),
        }
    }

    // ========== Lifecycle ==========

    /// Load every section from the durable store concurrently, each key
    /// independently falling back to its hard-coded default on absence,
    /// corruption or store failure. One bad key cannot stall the other five.
    ///
    /// Transitions the service to `Ready` once the full set has resolved.
    pub async fn hydrate(&self) -> Result<()> {
        let defaults = Resume::default();
        let store = &*self.store;

        let (personal_info, about, education, projects, skills, contact_info) = tokio::join!(
            load_typed(store, keys::PERSONAL_INFO, defaults.personal_info),
            load_typed(store, keys::ABOUT, defaults.about),
            load_typed(store, keys::EDUCATION, defaults.education),
            load_typed(store, keys::PROJECTS, defaults.projects),
            load_typed(store, keys::SKILLS, defaults.skills),
            load_typed(store, keys::CONTACT_INFO, defaults.contact_info),
        );

        let mut st = self.state.write().await;
        st.personal_info.set_value(personal_info);
        st.about.set_value(about);
        st.education.set_value(education);
        st.projects.set_value(projects);
        st.skills.set_value(skills);
        st.contact_info.set_value(contact_info);
        st.phase = Phase::Ready;
        info!("resume hydrated, all sections ready");
        Ok(())
    }

    pub async fn is_ready(&self) -> bool {
        self.state.read().await.phase == Phase::Ready
    }

    /// Authoritative values of all sections.
    pub async fn snapshot(&self) -> Resume {
        self.state.read().await.snapshot()
    }

    // ========== Save timestamp ==========

    /// Wall-clock time of the most recent completed persistence, manual or
    /// automatic. Never persisted itself.
    pub async fn last_saved(&self) -> Option<DateTime<Local>> {
        self.state.read().await.last_saved
    }

    /// Last-saved timestamp formatted for display.
    pub async fn last_saved_display(&self) -> Option<String> {
        self.last_saved()
            .await
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
    }

    // ========== Edit lifecycle ==========

    /// Enter edit mode for a section, copying the authoritative value into a
    /// draft. Re-entering keeps the existing draft. Refused while loading.
    pub async fn begin_edit(&self, section: Section) -> Result<()> {
        let mut st = self.state.write().await;
        if st.phase != Phase::Ready {
            return Err(AppError::state("cannot edit while hydrating"));
        }
        match section {
            Section::PersonalInfo => st.personal_info.begin_edit(),
            Section::About => st.about.begin_edit(),
            Section::Education => st.education.begin_edit(),
            Section::Projects => st.projects.begin_edit(),
            Section::Skills => st.skills.begin_edit(),
            Section::ContactInfo => st.contact_info.begin_edit(),
        }
        Ok(())
    }

    /// Drop a section's draft without persisting anything. No-op while
    /// viewing.
    pub async fn discard(&self, section: Section) {
        let mut st = self.state.write().await;
        match section {
            Section::PersonalInfo => st.personal_info.discard(),
            Section::About => st.about.discard(),
            Section::Education => st.education.discard(),
            Section::Projects => st.projects.discard(),
            Section::Skills => st.skills.discard(),
            Section::ContactInfo => st.contact_info.discard(),
        }
    }

    pub async fn is_editing(&self, section: Section) -> bool {
        let st = self.state.read().await;
        match section {
            Section::PersonalInfo => st.personal_info.is_editing(),
            Section::About => st.about.is_editing(),
            Section::Education => st.education.is_editing(),
            Section::Projects => st.projects.is_editing(),
            Section::Skills => st.skills.is_editing(),
            Section::ContactInfo => st.contact_info.is_editing(),
        }
    }

    /// Persist a section's draft and promote it to authoritative.
    ///
    /// The draft is applied locally whether or not the store write succeeds;
    /// the outcome reports the persistence result. Errors only when the
    /// section is not being edited.
    pub async fn commit(&self, section: Section) -> Result<CommitOutcome> {
        match section {
            Section::PersonalInfo => {
                self.commit_field(
                    keys::PERSONAL_INFO,
                    |st| st.personal_info.take_draft(),
                    |st, v| st.personal_info.set_value(v),
                )
                .await
            }
            Section::About => {
                self.commit_field(
                    keys::ABOUT,
                    |st| st.about.take_draft(),
                    |st, v| st.about.set_value(v),
                )
                .await
            }
            Section::Education => {
                self.commit_field(
                    keys::EDUCATION,
                    |st| st.education.take_draft(),
                    |st, v| st.education.set_value(v),
                )
                .await
            }
            Section::Projects => {
                self.commit_field(
                    keys::PROJECTS,
                    |st| st.projects.take_draft(),
                    |st, v| st.projects.set_value(v),
                )
                .await
            }
            Section::Skills => {
                self.commit_field(
                    keys::SKILLS,
                    |st| st.skills.take_draft(),
                    |st, v| st.skills.set_value(v),
                )
                .await
            }
            Section::ContactInfo => {
                self.commit_field(
                    keys::CONTACT_INFO,
                    |st| st.contact_info.take_draft(),
                    |st, v| st.contact_info.set_value(v),
                )
                .await
            }
        }
    }

    async fn commit_field<T, Take, Promote>(
        &self,
        key: &'static str,
        take: Take,
        promote: Promote,
    ) -> Result<CommitOutcome>
    where
        T: Serialize + Send,
        Take: FnOnce(&mut AppState) -> Option<T>,
        Promote: FnOnce(&mut AppState, T),
    {
        let draft = {
            let mut st = self.state.write().await;
            if st.phase != Phase::Ready {
                return Err(AppError::state("cannot commit while hydrating"));
            }
            take(&mut *st).ok_or_else(|| {
                AppError::state(format!("section '{}' is not being edited", key))
            })?
        };

        // The lock is released across the store call; an autosave batch that
        // snapshotted before this write lands may overwrite it on the store
        // until the next tick (last write wins on a key).
        let persisted = match save_typed(&*self.store, key, &draft).await {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to persist section '{}': {}", key, e);
                false
            }
        };

        let mut st = self.state.write().await;
        promote(&mut *st, draft);
        st.last_saved = Some(Local::now());
        Ok(CommitOutcome { persisted })
    }

    // ========== Section value snapshots ==========

    pub async fn personal_info(&self) -> PersonalInfo {
        self.state.read().await.personal_info.value().clone()
    }

    pub async fn about(&self) -> String {
        self.state.read().await.about.value().clone()
    }

    pub async fn education(&self) -> Vec<EducationEntry> {
        self.state.read().await.education.value().clone()
    }

    pub async fn projects(&self) -> Vec<ProjectEntry> {
        self.state.read().await.projects.value().clone()
    }

    pub async fn skills(&self) -> SkillSet {
        self.state.read().await.skills.value().clone()
    }

    pub async fn contact_info(&self) -> ContactInfo {
        self.state.read().await.contact_info.value().clone()
    }

    // ========== Draft snapshots (for editor display) ==========

    pub async fn personal_info_draft(&self) -> Option<PersonalInfo> {
        self.state.read().await.personal_info.draft().cloned()
    }

    pub async fn about_draft(&self) -> Option<String> {
        self.state.read().await.about.draft().cloned()
    }

    pub async fn education_draft(&self) -> Option<Vec<EducationEntry>> {
        self.state.read().await.education.draft().cloned()
    }

    pub async fn projects_draft(&self) -> Option<Vec<ProjectEntry>> {
        self.state.read().await.projects.draft().cloned()
    }

    pub async fn skills_draft(&self) -> Option<SkillSet> {
        self.state.read().await.skills.draft().cloned()
    }

    pub async fn contact_info_draft(&self) -> Option<ContactInfo> {
        self.state.read().await.contact_info.draft().cloned()
    }

    // ========== Draft mutation (edit mode only) ==========

    /// Replace the profile draft with edited field values.
    pub async fn set_personal_info_draft(&self, draft: PersonalInfo) -> Result<()> {
        let mut st = self.state.write().await;
        if st.personal_info.set_draft(draft) {
            Ok(())
        } else {
            Err(not_editing(Section::PersonalInfo))
        }
    }

    /// Replace the about-text draft.
    pub async fn set_about_draft(&self, draft: String) -> Result<()> {
        let mut st = self.state.write().await;
        if st.about.set_draft(draft) {
            Ok(())
        } else {
            Err(not_editing(Section::About))
        }
    }

    /// Replace the contact draft with edited field values.
    pub async fn set_contact_info_draft(&self, draft: ContactInfo) -> Result<()> {
        let mut st = self.state.write().await;
        if st.contact_info.set_draft(draft) {
            Ok(())
        } else {
            Err(not_editing(Section::ContactInfo))
        }
    }

    /// Append an education entry to the draft list, returning its id.
    pub async fn add_education_entry(&self, entry: EducationEntry) -> Result<String> {
        let mut st = self.state.write().await;
        let draft = st
            .education
            .draft_mut()
            .ok_or_else(|| not_editing(Section::Education))?;
        let id = entry.id.clone();
        draft.push(entry);
        Ok(id)
    }

    /// Remove an education entry from the draft list by id. Removing an
    /// unknown id is a no-op; the order of the remainder is preserved.
    pub async fn remove_education_entry(&self, id: &str) -> Result<()> {
        let mut st = self.state.write().await;
        let draft = st
            .education
            .draft_mut()
            .ok_or_else(|| not_editing(Section::Education))?;
        draft.retain(|entry| entry.id != id);
        Ok(())
    }

    /// Append a project entry to the draft list, returning its id.
    pub async fn add_project_entry(&self, entry: ProjectEntry) -> Result<String> {
        let mut st = self.state.write().await;
        let draft = st
            .projects
            .draft_mut()
            .ok_or_else(|| not_editing(Section::Projects))?;
        let id = entry.id.clone();
        draft.push(entry);
        Ok(id)
    }

    /// Remove a project entry from the draft list by id.
    pub async fn remove_project_entry(&self, id: &str) -> Result<()> {
        let mut st = self.state.write().await;
        let draft = st
            .projects
            .draft_mut()
            .ok_or_else(|| not_editing(Section::Projects))?;
        draft.retain(|entry| entry.id != id);
        Ok(())
    }

    /// Add a skill to the draft set. Returns whether the set changed
    /// (blank values and duplicates are rejected).
    pub async fn add_skill(&self, value: &str) -> Result<bool> {
        let mut st = self.state.write().await;
        let draft = st
            .skills
            .draft_mut()
            .ok_or_else(|| not_editing(Section::Skills))?;
        Ok(draft.add(value))
    }

    /// Remove a skill from the draft set by exact value.
    pub async fn remove_skill(&self, value: &str) -> Result<bool> {
        let mut st = self.state.write().await;
        let draft = st
            .skills
            .draft_mut()
            .ok_or_else(|| not_editing(Section::Skills))?;
        Ok(draft.remove(value))
    }

    // ========== Autosave batch ==========

    /// Persist the authoritative value of every section concurrently, then
    /// stamp the save timestamp once for the whole batch.
    ///
    /// Drafts are never autosaved. Returns `false` without touching the store
    /// while the service is still loading. Individual save failures are
    /// logged and swallowed; the batch still completes.
    pub async fn autosave_once(&self) -> bool {
        let snapshot = {
            let st = self.state.read().await;
            if st.phase != Phase::Ready {
                return false;
            }
            st.snapshot()
        };

        let store = &*self.store;
        let results = tokio::join!(
            save_typed(store, keys::PERSONAL_INFO, &snapshot.personal_info),
            save_typed(store, keys::ABOUT, &snapshot.about),
            save_typed(store, keys::EDUCATION, &snapshot.education),
            save_typed(store, keys::PROJECTS, &snapshot.projects),
            save_typed(store, keys::SKILLS, &snapshot.skills),
            save_typed(store, keys::CONTACT_INFO, &snapshot.contact_info),
        );

        let outcomes = [
            (keys::PERSONAL_INFO, results.0),
            (keys::ABOUT, results.1),
            (keys::EDUCATION, results.2),
            (keys::PROJECTS, results.3),
            (keys::SKILLS, results.4),
            (keys::CONTACT_INFO, results.5),
        ];
        for (key, result) in outcomes {
            if let Err(e) = result {
                warn!("autosave failed for section '{}': {}", key, e);
            }
        }

        let mut st = self.state.write().await;
        st.last_saved = Some(Local::now());
        true
    }
}

fn not_editing(section: Section) -> AppError {
    AppError::state(format!("section '{}' is not being edited", section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;
    use chrono::NaiveDate;

    fn service() -> (Arc<MemoryStore>, ResumeService) {
        let store = Arc::new(MemoryStore::new());
        let service = ResumeService::new(store.clone());
        (store, service)
    }

    async fn ready_service() -> (Arc<MemoryStore>, ResumeService) {
        let (store, service) = service();
        service.hydrate().await.unwrap();
        (store, service)
    }

    #[tokio::test]
    async fn test_hydrate_empty_store_yields_defaults() {
        let (_store, service) = service();
        assert!(!service.is_ready().await);

        service.hydrate().await.unwrap();
        assert!(service.is_ready().await);
        assert_eq!(service.snapshot().await, Resume::default());
    }

    #[tokio::test]
    async fn test_hydrate_reads_stored_values() {
        let (store, service) = service();
        save_typed(&*store, keys::ABOUT, "stored about text")
            .await
            .unwrap();

        service.hydrate().await.unwrap();
        assert_eq!(service.about().await, "stored about text");
        // untouched keys fall back to defaults
        assert_eq!(service.skills().await, SkillSet::default());
    }

    #[tokio::test]
    async fn test_edit_refused_while_loading() {
        let (_store, service) = service();
        let err = service.begin_edit(Section::About).await.unwrap_err();
        assert!(matches!(err, AppError::State(_)));
    }

    #[tokio::test]
    async fn test_commit_applies_draft_and_persists() {
        let (store, service) = ready_service().await;

        service.begin_edit(Section::About).await.unwrap();
        service
            .set_about_draft("rewritten".to_string())
            .await
            .unwrap();

        let outcome = service.commit(Section::About).await.unwrap();
        assert!(outcome.persisted);
        assert_eq!(service.about().await, "rewritten");
        assert!(!service.is_editing(Section::About).await);

        // the store saw the committed value
        assert_eq!(
            store.raw_get(keys::ABOUT).await,
            Some(serde_json::json!("rewritten"))
        );
        assert!(service.last_saved().await.is_some());
    }

    #[tokio::test]
    async fn test_commit_without_draft_errors() {
        let (_store, service) = ready_service().await;
        let err = service.commit(Section::About).await.unwrap_err();
        assert!(matches!(err, AppError::State(_)));
    }

    #[tokio::test]
    async fn test_discard_leaves_authoritative_untouched() {
        let (_store, service) = ready_service().await;
        let before = service.skills().await;

        service.begin_edit(Section::Skills).await.unwrap();
        assert!(service.add_skill("Rust").await.unwrap());
        assert!(service.remove_skill("React").await.unwrap());

        service.discard(Section::Skills).await;
        assert_eq!(service.skills().await, before);
        assert!(!service.is_editing(Section::Skills).await);
    }

    #[tokio::test]
    async fn test_skill_draft_rules() {
        let (_store, service) = ready_service().await;
        service.begin_edit(Section::Skills).await.unwrap();

        assert!(!service.add_skill("React").await.unwrap()); // duplicate
        assert!(!service.add_skill("   ").await.unwrap()); // whitespace
        assert!(service.add_skill("Rust").await.unwrap());

        service.commit(Section::Skills).await.unwrap();
        assert!(service.skills().await.contains("Rust"));
    }

    #[tokio::test]
    async fn test_education_remove_preserves_order() {
        let (_store, service) = ready_service().await;
        service.begin_edit(Section::Education).await.unwrap();

        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let a = service
            .add_education_entry(EducationEntry::new("A", "Uni", start, None, ""))
            .await
            .unwrap();
        let b = service
            .add_education_entry(EducationEntry::new("B", "Uni", start, None, ""))
            .await
            .unwrap();
        let c = service
            .add_education_entry(EducationEntry::new("C", "Uni", start, None, ""))
            .await
            .unwrap();
        assert!(a != b && b != c);

        service.remove_education_entry(&b).await.unwrap();
        service.commit(Section::Education).await.unwrap();

        let ids: Vec<String> = service
            .education()
            .await
            .into_iter()
            .map(|e| e.id)
            .collect();
        // seed entry first, then A and C in insertion order
        assert_eq!(ids, vec!["1".to_string(), a, c]);
    }

    #[tokio::test]
    async fn test_list_mutation_requires_edit_mode() {
        let (_store, service) = ready_service().await;
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let err = service
            .add_education_entry(EducationEntry::new("X", "Y", start, None, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::State(_)));
    }

    #[tokio::test]
    async fn test_autosave_persists_authoritative_not_draft() {
        let (store, service) = ready_service().await;

        service.begin_edit(Section::About).await.unwrap();
        service
            .set_about_draft("unsaved edit".to_string())
            .await
            .unwrap();

        assert!(service.autosave_once().await);

        let stored = store.raw_get(keys::ABOUT).await.unwrap();
        assert_eq!(stored, serde_json::json!(Resume::default().about));
        // the draft is still live
        assert_eq!(
            service.about_draft().await,
            Some("unsaved edit".to_string())
        );
    }

    #[tokio::test]
    async fn test_autosave_skipped_while_loading() {
        let (store, service) = service();
        assert!(!service.autosave_once().await);
        assert!(store.is_empty().await);
        assert!(service.last_saved().await.is_none());
    }

    #[tokio::test]
    async fn test_autosave_writes_all_six_keys() {
        let (store, service) = ready_service().await;
        assert!(service.autosave_once().await);
        assert_eq!(store.len().await, 6);
        for section in Section::ALL {
            assert!(store.raw_get(section.key()).await.is_some());
        }
        assert!(service.last_saved_display().await.is_some());
    }

    #[tokio::test]
    async fn test_commit_round_trips_through_hydration() {
        let (store, service) = ready_service().await;

        service.begin_edit(Section::ContactInfo).await.unwrap();
        let edited = ContactInfo {
            email: "new@mail.test".to_string(),
            ..ContactInfo::default()
        };
        service.set_contact_info_draft(edited.clone()).await.unwrap();
        service.commit(Section::ContactInfo).await.unwrap();

        // a fresh service over the same store sees the committed value
        let fresh = ResumeService::new(store);
        fresh.hydrate().await.unwrap();
        assert_eq!(fresh.contact_info().await, edited);
    }
}
