//! Note handlers.
//!
//! Each handler performs a single repository operation and either renders
//! the note list or redirects back to it.

use askama::Template;
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use notes_core::note::{CreateNoteRequest, Note, NoteError};

use super::html::HtmlTemplate;
use crate::{handlers::AppError, state::AppState};

/// Note list page.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    notes: Vec<Note>,
}

/// 302 back to the note list.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let notes = state.note_repo.list_notes().await?;

    Ok(HtmlTemplate(IndexTemplate { notes }))
}

/// Create a new note (POST /add).
pub async fn create_note(
    State(state): State<AppState>,
    form_result: Result<Form<CreateNoteRequest>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(payload) = form_result.map_err(|e| NoteError::InvalidForm(e.body_text()))?;

    tracing::debug!(payload = ?payload, "Received create note request");

    let note = payload.into_new_note()?;
    let id = state.note_repo.insert_note(&note).await?;

    tracing::info!(note_id = id, "Created note");

    Ok(redirect_to_index())
}

/// Delete a note by ID (GET /delete/{id}).
///
/// Unknown ids are not an error, the client is redirected either way.
pub async fn delete_note(
    State(state): State<AppState>,
    path_result: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = path_result.map_err(|e| NoteError::InvalidId(e.body_text()))?;

    tracing::debug!(note_id = id, "Received delete note request");

    if state.note_repo.delete_note(id).await? {
        tracing::info!(note_id = id, "Deleted note");
    } else {
        tracing::debug!(note_id = id, "No note to delete");
    }

    Ok(redirect_to_index())
}
