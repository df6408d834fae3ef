//! One-way binding between a backend-owned record and the editable copy a
//! form holds.
//!
//! A [`FormState`] seeds its draft from the source record, re-seeds it
//! wholesale whenever a *different* source arrives, and never merges partial
//! updates. Re-delivering the same source while the user is typing is a no-op.

use log::trace;
use std::fmt::Debug;

/// A record that can be edited through a flat, string-valued draft.
pub trait DraftRecord: Clone + PartialEq + Debug {
    /// Editable copy with empty-string defaults for absent fields.
    type Draft: Clone + PartialEq + Default + Debug + 'static;
    /// Identifies one input of the form.
    type Field: Copy + PartialEq + Debug + 'static;

    fn to_draft(&self) -> Self::Draft;

    /// Builds the record to save; empty inputs become absent fields.
    fn from_draft(draft: &Self::Draft) -> Self;

    /// Applies a single keystroke-level change to the draft.
    fn apply(draft: &mut Self::Draft, field: Self::Field, value: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Uninitialized,
    Populated,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: DraftRecord> {
    seed: Option<R>,
    pristine: R::Draft,
    draft: R::Draft,
    phase: FormPhase,
}

impl<R: DraftRecord> Default for FormState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DraftRecord> FormState<R> {
    pub fn new() -> Self {
        Self {
            seed: None,
            pristine: R::Draft::default(),
            draft: R::Draft::default(),
            phase: FormPhase::Uninitialized,
        }
    }

    /// Seeds the draft from `source`. Returns whether the draft was replaced.
    ///
    /// `None` means the backend had nothing (or the fetch failed); the form
    /// then holds empty defaults.
    pub fn sync(&mut self, source: Option<&R>) -> bool {
        if self.phase != FormPhase::Uninitialized && self.seed.as_ref() == source {
            return false;
        }
        trace!("Re-seeding form draft (record present: {})", source.is_some());
        self.seed = source.cloned();
        self.draft = source.map(R::to_draft).unwrap_or_default();
        self.pristine = self.draft.clone();
        self.phase = FormPhase::Populated;
        true
    }

    pub fn edit(&mut self, field: R::Field, value: String) {
        R::apply(&mut self.draft, field, value);
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    /// The record the current draft would save as.
    pub fn record(&self) -> R {
        R::from_draft(&self.draft)
    }

    pub fn mark_submitting(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    /// Enters `Submitting` and hands back the record built from the draft.
    pub fn submit(&mut self) -> R {
        self.mark_submitting();
        self.record()
    }

    /// Save finished, successfully or not.
    pub fn finish(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Populated;
        }
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn seed(&self) -> Option<&R> {
        self.seed.as_ref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.pristine
    }

    /// Drops local edits and returns to the last seeded values.
    pub fn reset(&mut self) {
        self.draft = self.pristine.clone();
        if self.phase == FormPhase::Editing {
            self.phase = FormPhase::Populated;
        }
    }
}

/// `""` becomes `None`; anything else is kept verbatim.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
