//! Note CRUD integration test against a running server.
//!
//! Exercises the full HTTP surface: create, list, get, update, delete, and
//! the error paths (missing text, malformed id, missing note).
//!
//! ## Running
//!
//! ```bash
//! # Start the server first (needs a PostgreSQL DATABASE_URL)
//! cargo run --bin notes-server
//!
//! # Run the tests (in another terminal)
//! cargo test --test notes_crud -- --ignored --nocapture
//! ```

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// API Types (matching server responses)
// ============================================================================

#[derive(Debug, Serialize)]
struct NoteBody {
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Note {
    id: Uuid,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Helpers
// ============================================================================

fn base_url() -> String {
    std::env::var("NOTES_SERVER_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

async fn create_note(client: &Client, base: &str, text: &str) -> Note {
    let response = client
        .post(format!("{}/notes", base))
        .json(&NoteBody {
            text: text.to_string(),
        })
        .send()
        .await
        .expect("create request failed");

    assert_eq!(response.status(), 201);
    response.json().await.expect("create response not a Note")
}

async fn delete_note(client: &Client, base: &str, id: Uuid) {
    client
        .delete(format!("{}/notes/{}", base, id))
        .send()
        .await
        .expect("delete request failed");
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_create_then_get_roundtrip() {
    let client = Client::new();
    let base = base_url();

    let created = create_note(&client, &base, "buy milk").await;
    assert_eq!(created.text, "buy milk");
    assert_eq!(created.created_at, created.updated_at);

    let response = client
        .get(format!("{}/notes/{}", base, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let fetched: Note = response.json().await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.text, "buy milk");

    delete_note(&client, &base, created.id).await;
}

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_create_missing_text_is_rejected_and_not_persisted() {
    let client = Client::new();
    let base = base_url();

    let before = client
        .get(format!("{}/notes", base))
        .send()
        .await
        .unwrap()
        .json::<Vec<Note>>()
        .await
        .unwrap()
        .len();

    let response = client
        .post(format!("{}/notes", base))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let after = client
        .get(format!("{}/notes", base))
        .send()
        .await
        .unwrap()
        .json::<Vec<Note>>()
        .await
        .unwrap()
        .len();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_get_unknown_id_is_not_found() {
    let client = Client::new();
    let base = base_url();

    let response = client
        .get(format!("{}/notes/{}", base, Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.message, "Note not found");
}

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_malformed_id_is_bad_request() {
    let client = Client::new();
    let base = base_url();

    for method in ["GET", "DELETE"] {
        let url = format!("{}/notes/not-a-uuid", base);
        let request = match method {
            "GET" => client.get(&url),
            _ => client.delete(&url),
        };
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), 400, "{} should reject malformed id", method);
    }
}

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_update_replaces_text_and_advances_updated_at() {
    let client = Client::new();
    let base = base_url();

    let created = create_note(&client, &base, "buy milk").await;

    let response = client
        .put(format!("{}/notes/{}", base, created.id))
        .json(&NoteBody {
            text: "buy oat milk".to_string(),
        })
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Note = response.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "buy oat milk");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    delete_note(&client, &base, created.id).await;
}

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_delete_returns_note_and_is_idempotent_to_404() {
    let client = Client::new();
    let base = base_url();

    let created = create_note(&client, &base, "ephemeral").await;

    let response = client
        .delete(format!("{}/notes/{}", base, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let removed: Note = response.json().await.unwrap();
    assert_eq!(removed.id, created.id);
    assert_eq!(removed.text, "ephemeral");

    // Gone for good: get and a second delete both 404.
    let get_again = client
        .get(format!("{}/notes/{}", base, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(get_again.status(), 404);

    let delete_again = client
        .delete(format!("{}/notes/{}", base, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_again.status(), 404);
}

#[tokio::test]
#[ignore = "requires a running notes-server"]
async fn test_list_count_and_content_range_track_creates_and_deletes() {
    let client = Client::new();
    let base = base_url();

    let before = client
        .get(format!("{}/notes", base))
        .send()
        .await
        .unwrap()
        .json::<Vec<Note>>()
        .await
        .unwrap()
        .len();

    let a = create_note(&client, &base, "first").await;
    let b = create_note(&client, &base, "second").await;
    let c = create_note(&client, &base, "third").await;
    delete_note(&client, &base, b.id).await;

    let response = client.get(format!("{}/notes", base)).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let range = response
        .headers()
        .get("content-range")
        .expect("Content-Range header missing")
        .to_str()
        .unwrap()
        .to_string();

    let notes: Vec<Note> = response.json().await.unwrap();
    assert_eq!(notes.len(), before + 2);
    assert_eq!(
        range,
        format!("notes 0-{count}/{count}", count = notes.len())
    );

    delete_note(&client, &base, a.id).await;
    delete_note(&client, &base, c.id).await;
}
