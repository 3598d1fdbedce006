//! notes-core: Core domain types for the notes API
//!
//! This crate defines the `Note` entity and its identifier type, shared by
//! the storage layer, the HTTP server, and any client code.
//!
//! # Usage
//!
//! ```rust
//! use notes_core::{Note, NoteId};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let note = Note {
//!     id: NoteId::new(),
//!     text: "buy milk".to_string(),
//!     created_at: now,
//!     updated_at: now,
//! };
//! assert_eq!(note.text, "buy milk");
//! ```

pub mod types;

pub use types::{Note, NoteId};
