//! UPDATE command - Replace a note's text.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{Note, make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub id: String,

    /// Replacement text content
    pub text: String,
}

/// Request body for updating a note.
#[derive(Serialize)]
struct UpdateNoteRequest {
    text: String,
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/notes/{}", base_url, args.id);

    let request_body = UpdateNoteRequest { text: args.text };

    let response: Note = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}
