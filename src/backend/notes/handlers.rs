/**
 * Notes HTTP Handlers
 *
 * - `GET /api/notes` - list notes, most recently saved first
 * - `GET /api/notes/{room_id}` - fetch one room's note
 * - `POST /api/notes` - create a room's note
 * - `PATCH /api/notes/{room_id}` - save content and editor
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::notes::db;
use crate::shared::{CreateNoteRequest, Note, UpdateNoteRequest};

const NOTE_NOT_FOUND: &str = "Note not found";

/// List notes (GET /api/notes)
pub async fn list_notes(State(pool): State<SqlitePool>) -> Result<Json<Vec<Note>>, BackendError> {
    let notes = db::list_notes(&pool).await?;
    tracing::debug!("[Notes] Listing {} notes", notes.len());
    Ok(Json(notes))
}

/// Fetch a room's note (GET /api/notes/{room_id})
///
/// # Errors
///
/// * `404 Not Found` - no note exists for this room
pub async fn get_note(
    State(pool): State<SqlitePool>,
    Path(room_id): Path<String>,
) -> Result<Json<Note>, BackendError> {
    db::get_note_by_room(&pool, &room_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            tracing::debug!("[Notes] No note for room {}", room_id);
            BackendError::not_found(NOTE_NOT_FOUND)
        })
}

/// Create a note (POST /api/notes)
///
/// # Errors
///
/// * `400 Bad Request` - missing title, room id or username, the room
///   already has a note, or the body is not JSON
/// * `415`/`422` - wrong content type or body shape
///
/// # Example Request
///
/// ```http
/// POST /api/notes HTTP/1.1
/// Content-Type: application/json
///
/// {"title":"Standup","roomId":"k3j9x0ab","username":"alice","content":""}
/// ```
pub async fn create_note(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), BackendError> {
    let Json(request) = payload?;
    let new_note = request.validate().map_err(|e| {
        tracing::warn!("[Notes] Rejected create request: {}", e);
        BackendError::from(e)
    })?;

    let note = db::create_note(&pool, new_note).await?;
    tracing::info!("[Notes] Created note '{}' for room {} by {}", note.title, note.room_id, note.created_by);

    Ok((StatusCode::CREATED, Json(note)))
}

/// Save a note (PATCH /api/notes/{room_id})
///
/// # Errors
///
/// * `404 Not Found` - no note exists for this room
/// * `400`/`415`/`422` - body rejected before reaching the store
pub async fn update_note(
    State(pool): State<SqlitePool>,
    Path(room_id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, BackendError> {
    let Json(request) = payload?;
    let note = db::update_note(&pool, &room_id, &request)
        .await?
        .ok_or_else(|| BackendError::not_found(NOTE_NOT_FOUND))?;

    tracing::debug!(
        "[Notes] Saved room {} ({} bytes) by {}",
        note.room_id,
        note.content.len(),
        note.last_edited_by
    );

    Ok(Json(note))
}
