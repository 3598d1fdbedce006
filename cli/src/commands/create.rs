//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{Note, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Text content for the new note
    pub text: String,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    text: String,
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let request_body = CreateNoteRequest { text: args.text };

    let response: Note = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
