//! Note CRUD routes.
//!
//! This module implements the note-related HTTP endpoints:
//! - POST /notes - Create a note
//! - GET /notes - List all notes
//! - GET /notes/{id} - Get a single note
//! - PUT /notes/{id} - Update a note's text
//! - DELETE /notes/{id} - Delete a note
//!
//! All responses carry the note object directly; there is no envelope.
//! The `{id}` segment is extracted as a raw string so that the 400-vs-404
//! distinction stays an explicit service-level check.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    routing::get,
};
use serde::Deserialize;

use notes_core::Note;

use crate::error::{ApiError, ApiResult};
use crate::extract::ValidJson;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /notes.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    /// Text content for the new note. Required; may be empty.
    pub text: String,
}

/// Request body for PUT /notes/{id}.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateNoteRequest {
    /// Replacement text content. Required; may be empty.
    pub text: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Format the stubbed `Content-Range` header value for the list response.
fn content_range(count: i64) -> String {
    format!("notes 0-{}/{}", count, count)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "text": "buy milk" }`
///
/// # Response
///
/// - 201 Created: the full note
/// - 400 Bad Request: missing or non-string `text`
async fn create_note(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let note = state.service().create(request.text).await?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes - List all notes.
///
/// The `Content-Range` header reports the total count in the form
/// `notes 0-{count}/{count}`; there is no actual range slicing.
///
/// # Response
///
/// - 200 OK: `[Note, ...]`
async fn list_notes(State(state): State<AppState>) -> ApiResult<(HeaderMap, Json<Vec<Note>>)> {
    let service = state.service();

    let notes = service.list().await?;
    let count = service.count().await?;

    let mut headers = HeaderMap::new();
    let range = HeaderValue::from_str(&content_range(count))
        .map_err(|e| ApiError::Internal(format!("Invalid Content-Range value: {}", e)))?;
    headers.insert("Content-Range", range);

    tracing::debug!(count, "Listed notes");

    Ok((headers, Json(notes)))
}

/// GET /notes/{id} - Get a single note.
///
/// # Response
///
/// - 200 OK: the note
/// - 400 Bad Request: malformed id
/// - 404 Not Found: `{ "message": "Note not found" }`
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Note>> {
    let note = state.service().find_by_id(&id).await?;
    Ok(Json(note))
}

/// PUT /notes/{id} - Replace a note's text.
///
/// Refreshes `updatedAt`; `id` and `createdAt` are unchanged.
///
/// # Request
///
/// Body: `{ "text": "buy oat milk" }`
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: malformed id or body
/// - 404 Not Found: `{ "message": "Note not found" }`
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(request): ValidJson<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let note = state.service().replace_by_id(&id, request.text).await?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id} - Delete a note.
///
/// Returns the note as it was before removal. Deleting the same id twice
/// yields 404 the second time.
///
/// # Response
///
/// - 200 OK: the deleted note
/// - 400 Bad Request: malformed id
/// - 404 Not Found: `{ "message": "Note not found" }`
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Note>> {
    let note = state.service().delete_by_id(&id).await?;

    tracing::info!(note_id = %note.id, "Note deleted");

    Ok(Json(note))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
