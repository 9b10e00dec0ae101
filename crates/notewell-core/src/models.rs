//! Core data models for the notewell client.
//!
//! These types mirror the wire representation of the notes API: entities
//! carry a server-assigned `_id`, fields are camelCase, and list/detail
//! responses wrap the entity in a `{ "data": ... }` envelope (handled by the
//! client crate).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Opaque server-assigned note identity.
pub type NoteId = String;

/// Opaque server-assigned label identity.
pub type LabelId = String;

// =============================================================================
// LABEL TYPES
// =============================================================================

/// A named, colored tag attachable to any number of notes.
///
/// Notes embed denormalized copies of this type in [`Note::labels`]; the
/// stores keep those copies in sync on every label mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "_id")]
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

/// Fields for creating a label.
#[derive(Debug, Clone, Serialize)]
pub struct LabelDraft {
    pub name: String,
    pub color: String,
}

impl LabelDraft {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial label update; `None` fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A user-authored note as the server represents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub description: String,
    pub color: String,
    /// Embedded copies of the referenced labels (id + name + color). The
    /// server populates these on every response; the stores rewrite them
    /// when a label is renamed, recolored, or deleted.
    #[serde(default)]
    pub labels: Vec<Label>,
    pub is_pinned: bool,
    pub is_archived: bool,
    /// Manual sort position. The server owns its assignment and
    /// tie-breaking; the client never computes order locally.
    #[serde(default)]
    pub order: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Whether the note references the given label.
    pub fn has_label(&self, label_id: &str) -> bool {
        self.labels.iter().any(|l| l.id == label_id)
    }
}

/// Fields for creating a note. Title and description are required; color
/// defaults to white and labels to empty when unset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Label ids to attach; the server resolves them into embedded copies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<LabelId>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: None,
            labels: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_labels(mut self, labels: Vec<LabelId>) -> Self {
        self.labels = labels;
        self
    }

    /// The color the note will be created with.
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(defaults::NOTE_COLOR)
    }
}

/// Partial note update; `None` fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LabelId>>,
}
