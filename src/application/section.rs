//! Per-section draft/commit state container.
//!
//! A section is either *viewing* (only the authoritative value exists) or
//! *editing* (a draft copy is live and mutable). The draft may diverge
//! arbitrarily until it is either promoted to authoritative (commit) or
//! dropped (discard); the authoritative value is untouched either way until
//! the promotion happens.

/// Authoritative value plus an optional in-progress draft.
#[derive(Debug, Clone)]
pub struct SectionState<T> {
    value: T,
    draft: Option<T>,
}

impl<T: Clone> SectionState<T> {
    pub fn new(value: T) -> Self {
        Self { value, draft: None }
    }

    /// The committed value, independent of any in-progress edit.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Enter edit mode, initializing the draft as a copy of the authoritative
    /// value. Re-entering while already editing keeps the existing draft.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.value.clone());
        }
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    /// Mutable access to the draft; `None` while viewing.
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.draft.as_mut()
    }

    /// Replace the whole draft. No-op while viewing.
    pub fn set_draft(&mut self, draft: T) -> bool {
        if self.draft.is_some() {
            self.draft = Some(draft);
            true
        } else {
            false
        }
    }

    /// Leave edit mode, dropping the draft. The authoritative value is
    /// untouched. Safe to call while viewing.
    pub fn discard(&mut self) {
        self.draft = None;
    }

    /// Take the draft out for persistence, leaving the section in view mode.
    /// The caller decides when to promote it via `set_value`.
    pub fn take_draft(&mut self) -> Option<T> {
        self.draft.take()
    }

    /// Replace the authoritative value (commit promotion or hydration).
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }
}
