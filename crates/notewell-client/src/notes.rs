//! Local mirror of the remote notes collection.
//!
//! The store holds the notes matching the current [`NoteFilter`] and applies
//! every mutation from the server's returned entity, never from a local
//! guess. Out-of-order `load` responses are discarded by sequence tagging so
//! a slow response can never overwrite a newer one.

use std::sync::Arc;

use serde_json::{json, Value as JsonValue};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use notewell_core::{view, Error, Note, NoteDraft, NoteFilter, NotePatch, Result};

use crate::executor::{decode_data, ApiRequest, RequestExecutor};

#[derive(Debug, Default)]
struct NoteState {
    notes: Vec<Note>,
    filter: NoteFilter,
    /// Ticket handed to the most recently issued load or applied mutation.
    issued_seq: u64,
    /// Ticket of the load or mutation whose result currently populates
    /// `notes`.
    applied_seq: u64,
}

impl NoteState {
    /// Enter a mutation into the load sequence: any load issued before this
    /// point is stale from here on and will be discarded on arrival.
    fn mark_mutated(&mut self) {
        self.issued_seq += 1;
        self.applied_seq = self.issued_seq;
    }

    /// Whether the load holding `seq` has been overtaken by a newer load or
    /// an applied mutation.
    fn is_superseded(&self, seq: u64) -> bool {
        seq < self.issued_seq || seq <= self.applied_seq
    }
}

/// Authoritative local cache of notes matching the current filter.
///
/// Clone-able handle; clones share state. All mutating operations are
/// async, suspend only at the executor boundary, and resolve to a
/// `Result` whose error message is ready for the UI. A failed mutation
/// leaves the cache untouched.
#[derive(Clone)]
pub struct NoteStore {
    executor: Arc<dyn RequestExecutor>,
    inner: Arc<RwLock<NoteState>>,
}

impl NoteStore {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            executor,
            inner: Arc::new(RwLock::new(NoteState::default())),
        }
    }

    /// Replace the collection with the notes matching `filter`.
    ///
    /// Safe to invoke repeatedly: each call takes a monotonic ticket before
    /// suspending, and its response is applied only if no newer load has
    /// been issued and no mutation has been applied in the meantime. A
    /// superseded call resolves `Ok` without touching state, whether its
    /// own response succeeded or failed.
    pub async fn load(&self, filter: NoteFilter) -> Result<()> {
        let (seq, query) = {
            let mut state = self.inner.write().await;
            state.issued_seq += 1;
            state.filter = filter.clone();
            (state.issued_seq, filter.to_query())
        };

        let result = self
            .executor
            .execute(ApiRequest::get("/notes").with_query(query))
            .await
            .and_then(decode_data::<Vec<Note>>);

        match result {
            Ok(notes) => {
                let mut state = self.inner.write().await;
                if state.is_superseded(seq) {
                    debug!(
                        seq,
                        issued = state.issued_seq,
                        applied = state.applied_seq,
                        "discarding superseded notes load"
                    );
                    return Ok(());
                }
                info!(seq, result_count = notes.len(), "notes loaded");
                state.applied_seq = seq;
                state.notes = notes;
                Ok(())
            }
            Err(e) => {
                let state = self.inner.read().await;
                if state.is_superseded(seq) {
                    debug!(seq, "ignoring failure of superseded notes load");
                    return Ok(());
                }
                Err(e.or_fallback("Failed to fetch notes"))
            }
        }
    }

    /// Reload with the filter currently in effect.
    pub async fn reload(&self) -> Result<()> {
        let filter = self.filter().await;
        self.load(filter).await
    }

    /// Create a note. Title and description are validated before any
    /// network call; color defaults to white. The created note joins the
    /// collection only when its archive flag matches the current view.
    pub async fn create(&self, draft: NoteDraft) -> Result<Note> {
        if draft.title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if draft.description.trim().is_empty() {
            return Err(Error::Validation("Description is required".to_string()));
        }

        let mut body = serde_json::to_value(&draft)?;
        body["color"] = JsonValue::String(draft.color_or_default().to_string());

        let note = self
            .executor
            .execute(ApiRequest::post("/notes", body))
            .await
            .and_then(decode_data::<Note>)
            .map_err(|e| e.or_fallback("Failed to create note"))?;

        let mut state = self.inner.write().await;
        state.mark_mutated();
        if note.is_archived == state.filter.is_archived {
            state.notes.insert(0, note.clone());
        }
        info!(note_id = %note.id, "note created");
        Ok(note)
    }

    /// Partial field update. The cache takes the server's returned
    /// representation, never a locally merged guess.
    pub async fn update(&self, id: &str, patch: NotePatch) -> Result<Note> {
        let body = serde_json::to_value(&patch)?;
        let note = self
            .executor
            .execute(ApiRequest::put(format!("/notes/{id}")).with_body(body))
            .await
            .and_then(decode_data::<Note>)
            .map_err(|e| e.or_fallback("Failed to update note"))?;

        self.replace(&note).await;
        info!(note_id = %note.id, "note updated");
        Ok(note)
    }

    /// Delete remotely, then drop from the collection on success only.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.executor
            .execute(ApiRequest::delete(format!("/notes/{id}")))
            .await
            .map_err(|e| e.or_fallback("Failed to delete note"))?;

        let mut state = self.inner.write().await;
        state.mark_mutated();
        state.notes.retain(|n| n.id != id);
        info!(note_id = %id, "note deleted");
        Ok(())
    }

    /// Flip the pin flag server-side and take the returned note. No
    /// client-side guess of the new value before the response.
    pub async fn toggle_pin(&self, id: &str) -> Result<Note> {
        let note = self
            .executor
            .execute(ApiRequest::put(format!("/notes/{id}/pin")))
            .await
            .and_then(decode_data::<Note>)
            .map_err(|e| e.or_fallback("Failed to update pin status"))?;

        self.replace(&note).await;
        info!(note_id = %note.id, pinned = note.is_pinned, "note pin toggled");
        Ok(note)
    }

    /// Flip the archive flag server-side. A note whose new archive flag no
    /// longer matches the view leaves the collection; one that matches is
    /// replaced in place, or re-enters at the front if it had already left
    /// the view (toggling twice restores it).
    pub async fn toggle_archive(&self, id: &str) -> Result<Note> {
        let note = self
            .executor
            .execute(ApiRequest::put(format!("/notes/{id}/archive")))
            .await
            .and_then(decode_data::<Note>)
            .map_err(|e| e.or_fallback("Failed to update archive status"))?;

        let mut state = self.inner.write().await;
        state.mark_mutated();
        if note.is_archived != state.filter.is_archived {
            state.notes.retain(|n| n.id != note.id);
        } else if let Some(slot) = state.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note.clone();
        } else {
            state.notes.insert(0, note.clone());
        }
        drop(state);
        info!(note_id = %note.id, archived = note.is_archived, "note archive toggled");
        Ok(note)
    }

    /// Send the desired position, then refetch with the current filter.
    /// The server is the sole source of truth for ordering; no local
    /// reordering is attempted. Once the reorder itself has landed the
    /// operation is a success: a failed refetch only leaves the local
    /// ordering stale until the next load, and is logged rather than
    /// reported against the reorder.
    pub async fn reorder(&self, id: &str, new_order: f64) -> Result<()> {
        self.executor
            .execute(
                ApiRequest::put("/notes/reorder")
                    .with_body(json!({ "noteId": id, "newOrder": new_order })),
            )
            .await
            .map_err(|e| e.or_fallback("Failed to reorder notes"))?;

        if let Err(e) = self.reload().await {
            warn!(note_id = %id, error = %e, "refetch after reorder failed");
        }
        Ok(())
    }

    /// Rewrite the embedded copy of `label` on every referencing note.
    /// Called by `LabelStore` after a rename/recolor; this is the only
    /// cross-store mutation path.
    pub async fn apply_label_update(&self, label: &notewell_core::Label) {
        let mut state = self.inner.write().await;
        state.mark_mutated();
        for note in state.notes.iter_mut() {
            for embedded in note.labels.iter_mut() {
                if embedded.id == label.id {
                    *embedded = label.clone();
                }
            }
        }
    }

    /// Strip `label_id` from every note's label set. An emptied set is
    /// valid. Called by `LabelStore` after a delete.
    pub async fn detach_label(&self, label_id: &str) {
        let mut state = self.inner.write().await;
        state.mark_mutated();
        for note in state.notes.iter_mut() {
            note.labels.retain(|l| l.id != label_id);
        }
    }

    /// Snapshot of the current collection.
    pub async fn notes(&self) -> Vec<Note> {
        self.inner.read().await.notes.clone()
    }

    /// The filter currently in effect.
    pub async fn filter(&self) -> NoteFilter {
        self.inner.read().await.filter.clone()
    }

    /// Partition the current collection into the three display groups.
    pub async fn board(&self) -> view::Board {
        view::Board::from_notes(self.notes().await)
    }

    async fn replace(&self, note: &Note) {
        let mut state = self.inner.write().await;
        state.mark_mutated();
        if let Some(slot) = state.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note.clone();
        }
    }
}
