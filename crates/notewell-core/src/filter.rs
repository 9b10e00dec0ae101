//! Query criteria for the notes collection.

use serde::{Deserialize, Serialize};

use crate::models::LabelId;

/// The active query constraints for the notes view.
///
/// A plain value object: any field change is a new filter and must be
/// re-submitted through `NoteStore::load`. The default filter is the
/// "active notes" view (no search, no label constraint, any pin state,
/// not archived).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFilter {
    /// Free-text search; empty means unconstrained.
    pub search: String,
    /// Restrict to notes carrying any of these labels; empty means
    /// unconstrained.
    pub labels: Vec<LabelId>,
    /// Restrict by pin state; `None` means unconstrained.
    pub is_pinned: Option<bool>,
    /// Which side of the archive the view shows. Unlike the other fields
    /// this is a constraint at both values, so it is always sent.
    pub is_archived: bool,
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            labels: Vec::new(),
            is_pinned: None,
            is_archived: false,
        }
    }
}

impl NoteFilter {
    /// The archived-notes view with no other constraints.
    pub fn archived() -> Self {
        Self {
            is_archived: true,
            ..Self::default()
        }
    }

    /// Query-string pairs for `GET /notes`. Unconstraining fields are
    /// omitted so the server applies no filter for them.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if !self.search.is_empty() {
            query.push(("search".to_string(), self.search.clone()));
        }
        if !self.labels.is_empty() {
            query.push(("labels".to_string(), self.labels.join(",")));
        }
        if let Some(pinned) = self.is_pinned {
            query.push(("isPinned".to_string(), pinned.to_string()));
        }
        query.push(("isArchived".to_string(), self.is_archived.to_string()));
        query
    }
}

/// Partial filter change, merged onto the current filter by the session.
/// Mirrors the shape of the filter itself with every field optional.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub labels: Option<Vec<LabelId>>,
    /// `Some(None)` clears the pin constraint.
    pub is_pinned: Option<Option<bool>>,
    pub is_archived: Option<bool>,
}

impl FilterPatch {
    /// Apply this patch on top of `base`, producing the next filter.
    pub fn apply(&self, base: &NoteFilter) -> NoteFilter {
        NoteFilter {
            search: self.search.clone().unwrap_or_else(|| base.search.clone()),
            labels: self.labels.clone().unwrap_or_else(|| base.labels.clone()),
            is_pinned: self.is_pinned.unwrap_or(base.is_pinned),
            is_archived: self.is_archived.unwrap_or(base.is_archived),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_only_sends_archive_flag() {
        let query = NoteFilter::default().to_query();
        assert_eq!(
            query,
            vec![("isArchived".to_string(), "false".to_string())]
        );
    }

    #[test]
    fn test_full_filter_sends_every_constraint() {
        let filter = NoteFilter {
            search: "milk".to_string(),
            labels: vec!["l1".to_string(), "l2".to_string()],
            is_pinned: Some(true),
            is_archived: false,
        };
        let query = filter.to_query();
        assert_eq!(
            query,
            vec![
                ("search".to_string(), "milk".to_string()),
                ("labels".to_string(), "l1,l2".to_string()),
                ("isPinned".to_string(), "true".to_string()),
                ("isArchived".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_archived_view_constructor() {
        let filter = NoteFilter::archived();
        assert!(filter.is_archived);
        assert!(filter.search.is_empty());
        assert_eq!(
            filter.to_query(),
            vec![("isArchived".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_patch_merges_onto_base() {
        let base = NoteFilter {
            search: "milk".to_string(),
            ..Default::default()
        };
        let patch = FilterPatch {
            is_archived: Some(true),
            ..Default::default()
        };
        let next = patch.apply(&base);
        assert_eq!(next.search, "milk");
        assert!(next.is_archived);
    }

    #[test]
    fn test_patch_can_clear_pin_constraint() {
        let base = NoteFilter {
            is_pinned: Some(true),
            ..Default::default()
        };
        let patch = FilterPatch {
            is_pinned: Some(None),
            ..Default::default()
        };
        assert_eq!(patch.apply(&base).is_pinned, None);
    }
}
