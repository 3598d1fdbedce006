//! Service layer providing domain-typed CRUD over the raw store.
//!
//! `NoteService` wraps `Store` with notes-core types and input validation,
//! independent of any transport. It handles:
//!
//! - Identifier parsing: raw strings become UUIDs here, so a malformed id
//!   fails with `InvalidNoteId` before any query runs
//! - Conversion between database rows and domain `Note` values

use uuid::Uuid;

use notes_core::Note;

use crate::Store;
use crate::error::{StoreError, StoreResult};
use crate::models::NewNote;

/// Transport-independent CRUD operations over the note store.
#[derive(Debug, Clone)]
pub struct NoteService {
    store: Store,
}

impl NoteService {
    /// Create a new service wrapping the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get reference to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Create a note with the given text.
    ///
    /// Empty strings are accepted; presence of the field is the caller's
    /// responsibility (enforced by the request type at the API layer).
    pub async fn create(&self, text: String) -> StoreResult<Note> {
        let row = self.store.insert_note(&NewNote::new(text)).await?;
        Ok(row.into())
    }

    /// List all notes, oldest first.
    pub async fn list(&self) -> StoreResult<Vec<Note>> {
        let rows = self.store.list_notes().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count all notes.
    pub async fn count(&self) -> StoreResult<i64> {
        self.store.count_notes().await
    }

    /// Fetch a note by its raw identifier string.
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Note> {
        let id = parse_id(id)?;
        let row = self.store.get_note(id).await?;
        Ok(row.into())
    }

    /// Replace a note's text, refreshing its `updated_at` timestamp.
    pub async fn replace_by_id(&self, id: &str, text: String) -> StoreResult<Note> {
        let id = parse_id(id)?;
        let row = self.store.replace_note(id, &text).await?;
        Ok(row.into())
    }

    /// Delete a note, returning it as it was before removal.
    pub async fn delete_by_id(&self, id: &str) -> StoreResult<Note> {
        let id = parse_id(id)?;
        let row = self.store.delete_note(id).await?;
        Ok(row.into())
    }
}

/// Parse a raw identifier string into a UUID.
///
/// A malformed identifier is a validation failure (`InvalidNoteId`), not a
/// lookup miss (`NoteNotFound`).
fn parse_id(raw: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidNoteId(raw.to_string()))
}
