//! Local mirror of the remote label collection.
//!
//! Labels are cached unfiltered. Renames and deletes cascade into the
//! note collection through `NoteStore`'s explicit entry points so no note
//! ever displays a stale embedded label.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use notewell_core::{Error, Label, LabelDraft, LabelPatch, Result};

use crate::executor::{decode_data, ApiRequest, RequestExecutor};
use crate::notes::NoteStore;

/// Authoritative local cache of all labels.
///
/// Clone-able handle; clones share state.
#[derive(Clone)]
pub struct LabelStore {
    executor: Arc<dyn RequestExecutor>,
    inner: Arc<RwLock<Vec<Label>>>,
}

impl LabelStore {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            executor,
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fetch the full label collection, replacing the local cache.
    pub async fn load(&self) -> Result<()> {
        let labels = self
            .executor
            .execute(ApiRequest::get("/labels"))
            .await
            .and_then(decode_data::<Vec<Label>>)
            .map_err(|e| e.or_fallback("Failed to fetch labels"))?;

        info!(result_count = labels.len(), "labels loaded");
        *self.inner.write().await = labels;
        Ok(())
    }

    /// Create a label and append it to the cache. The name is required;
    /// any color value the caller passes is accepted as-is.
    pub async fn create(&self, draft: LabelDraft) -> Result<Label> {
        if draft.name.trim().is_empty() {
            return Err(Error::Validation("Name is required".to_string()));
        }

        let body = serde_json::to_value(&draft)?;
        let label = self
            .executor
            .execute(ApiRequest::post("/labels", body))
            .await
            .and_then(decode_data::<Label>)
            .map_err(|e| e.or_fallback("Failed to create label"))?;

        self.inner.write().await.push(label.clone());
        info!(label_id = %label.id, "label created");
        Ok(label)
    }

    /// Rename/recolor a label, then rewrite the embedded copy on every
    /// referencing note in `notes`. Cross-store propagation goes through
    /// `NoteStore::apply_label_update` only.
    pub async fn update(&self, notes: &NoteStore, id: &str, patch: LabelPatch) -> Result<Label> {
        let body = serde_json::to_value(&patch)?;
        let label = self
            .executor
            .execute(ApiRequest::put(format!("/labels/{id}")).with_body(body))
            .await
            .and_then(decode_data::<Label>)
            .map_err(|e| e.or_fallback("Failed to update label"))?;

        {
            let mut cache = self.inner.write().await;
            if let Some(slot) = cache.iter_mut().find(|l| l.id == label.id) {
                *slot = label.clone();
            }
        }
        notes.apply_label_update(&label).await;
        info!(label_id = %label.id, "label updated");
        Ok(label)
    }

    /// Delete a label, then strip its id from every note's label set in
    /// `notes`. A note left with no labels is valid.
    pub async fn remove(&self, notes: &NoteStore, id: &str) -> Result<()> {
        self.executor
            .execute(ApiRequest::delete(format!("/labels/{id}")))
            .await
            .map_err(|e| e.or_fallback("Failed to delete label"))?;

        self.inner.write().await.retain(|l| l.id != id);
        notes.detach_label(id).await;
        info!(label_id = %id, "label deleted");
        Ok(())
    }

    /// Snapshot of the current collection.
    pub async fn labels(&self) -> Vec<Label> {
        self.inner.read().await.clone()
    }

    /// Look up a label by id.
    pub async fn get(&self, id: &str) -> Option<Label> {
        self.inner.read().await.iter().find(|l| l.id == id).cloned()
    }
}
