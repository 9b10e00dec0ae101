//! Session facade wiring the two stores together.
//!
//! One `Session` is constructed when the user signs in and dropped when the
//! session ends; there is no ambient global state. Filter changes and label
//! cascades flow through here so callers cannot skip the consistency rules.

use std::sync::Arc;

use notewell_core::{view, FilterPatch, Label, LabelPatch, NoteFilter, Result};

use crate::executor::RequestExecutor;
use crate::labels::LabelStore;
use crate::notes::NoteStore;

/// The note/label synchronization layer for one signed-in session.
pub struct Session {
    notes: NoteStore,
    labels: LabelStore,
}

impl Session {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            notes: NoteStore::new(executor.clone()),
            labels: LabelStore::new(executor),
        }
    }

    /// Initial fetch: the full label collection, then the default
    /// active-notes view.
    pub async fn start(&self) -> Result<()> {
        self.labels.load().await?;
        self.notes.load(NoteFilter::default()).await
    }

    /// Replace the active filter and refetch the notes view. An in-flight
    /// load for the previous filter is superseded and its response
    /// discarded.
    pub async fn apply_filter(&self, filter: NoteFilter) -> Result<()> {
        self.notes.load(filter).await
    }

    /// Merge a partial filter change onto the current filter and refetch.
    pub async fn merge_filter(&self, patch: FilterPatch) -> Result<()> {
        let next = patch.apply(&self.notes.filter().await);
        self.notes.load(next).await
    }

    /// Rename/recolor a label, cascading into the cached notes.
    pub async fn update_label(&self, id: &str, patch: LabelPatch) -> Result<Label> {
        self.labels.update(&self.notes, id, patch).await
    }

    /// Delete a label, stripping it from the cached notes.
    pub async fn remove_label(&self, id: &str) -> Result<()> {
        self.labels.remove(&self.notes, id).await
    }

    /// The three display partitions of the current notes view.
    pub async fn board(&self) -> view::Board {
        self.notes.board().await
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }
}
