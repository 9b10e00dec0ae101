//! # notewell-core
//!
//! Core types and abstractions for the notewell note-taking client.
//!
//! This crate provides the domain models (notes, labels, filters, view
//! partitions) and the error taxonomy that the client crate builds on.

pub mod defaults;
pub mod error;
pub mod filter;
pub mod models;
pub mod view;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{FilterPatch, NoteFilter};
pub use models::{Label, LabelDraft, LabelId, LabelPatch, Note, NoteDraft, NoteId, NotePatch};
pub use view::{project, Board, BoardView};
