//! # notewell-client
//!
//! Client-side synchronization layer for the notewell note-taking service.
//!
//! This crate provides:
//! - `RequestExecutor` trait abstracting the HTTP transport
//! - Reqwest-backed executor with bearer-token auth
//! - `NoteStore`: filtered local mirror of the notes collection
//! - `LabelStore`: local mirror of the labels collection with cascading
//!   propagation into cached notes
//! - `Session` facade owning both stores for one signed-in session
//! - Mock executor for deterministic tests
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use notewell_client::{HttpExecutor, Session};
//! use notewell_core::NoteFilter;
//!
//! #[tokio::main]
//! async fn main() {
//!     let executor = Arc::new(HttpExecutor::from_env());
//!     let session = Session::new(executor);
//!     session.start().await.unwrap();
//!     session.apply_filter(NoteFilter::archived()).await.unwrap();
//!     let board = session.board().await;
//!     println!("{} archived notes", board.archived.len());
//! }
//! ```

pub mod executor;
pub mod http;
pub mod labels;
pub mod mock;
pub mod notes;
pub mod session;

// Re-export commonly used types at crate root
pub use executor::{decode_data, ApiRequest, Method, RequestExecutor};
pub use http::HttpExecutor;
pub use labels::LabelStore;
pub use notes::NoteStore;
pub use session::Session;
