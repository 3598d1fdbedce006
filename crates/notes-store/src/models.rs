//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx queries.
//! They are separate from the domain types in notes-core to allow for
//! database-specific representations.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use notes_core::{Note, NoteId};

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Input for creating a new note.
///
/// The identifier is generated here; the database fills in both timestamps.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: Uuid,
    pub text: String,
}

impl NewNote {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
        }
    }

    pub fn with_id(id: Uuid, text: String) -> Self {
        Self { id, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_generates_id() {
        let a = NewNote::new("one".to_string());
        let b = NewNote::new("two".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_note_row_to_domain() {
        let now = Utc::now();
        let row = NoteRow {
            id: Uuid::nil(),
            text: "buy milk".to_string(),
            created_at: now,
            updated_at: now,
        };
        let note: Note = row.into();
        assert_eq!(note.id, NoteId::from_uuid(Uuid::nil()));
        assert_eq!(note.text, "buy milk");
        assert_eq!(note.created_at, now);
    }
}
