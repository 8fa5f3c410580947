/**
 * Note Store
 *
 * This module persists notes in the SQLite `notes` table, one row per room.
 * The table is created by the embedded migrations run at startup.
 */

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{NewNote, Note, UpdateNoteRequest};

/// Current time as stored in the table
///
/// Fixed-width RFC 3339 so that `ORDER BY updated_at` on the text column is
/// chronological.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// List all notes, most recently saved first
///
/// # Arguments
/// * `pool` - Database connection pool
///
/// # Returns
/// Notes ordered by `updated_at` descending, or error
pub async fn list_notes(pool: &SqlitePool) -> Result<Vec<Note>, sqlx::Error> {
    let notes = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, room_id, title, content, created_by, last_edited_by, created_at, updated_at
        FROM notes
        ORDER BY updated_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(notes)
}

/// Get the note of a room
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `room_id` - Room id
///
/// # Returns
/// Note or None if the room has no note
pub async fn get_note_by_room(pool: &SqlitePool, room_id: &str) -> Result<Option<Note>, sqlx::Error> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, room_id, title, content, created_by, last_edited_by, created_at, updated_at
        FROM notes
        WHERE room_id = ?1
        "#,
    )
    .bind(room_id)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}

/// Create the note of a room
///
/// The creator is recorded as both `created_by` and `last_edited_by`.
///
/// # Errors
/// * `BackendError::DuplicateRoom` - a note already exists for `room_id`
/// * `BackendError::DatabaseError` - any other store failure
pub async fn create_note(pool: &SqlitePool, note: NewNote) -> Result<Note, BackendError> {
    if get_note_by_room(pool, &note.room_id).await?.is_some() {
        return Err(BackendError::duplicate_room(note.room_id));
    }

    let id = Uuid::new_v4();
    let now = timestamp();

    let result = sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (id, room_id, title, content, created_by, last_edited_by, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?5, ?6, ?6)
        RETURNING id, room_id, title, content, created_by, last_edited_by, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&note.room_id)
    .bind(&note.title)
    .bind(&note.content)
    .bind(&note.created_by)
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(created) => Ok(created),
        // Lost a race with a concurrent create for the same room
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(BackendError::duplicate_room(note.room_id))
        }
        Err(e) => Err(e.into()),
    }
}

/// Save new content for a room's note
///
/// Absent fields in `update` keep their stored value; `updated_at` is always
/// bumped.
///
/// # Returns
/// Updated note or None if the room has no note
pub async fn update_note(
    pool: &SqlitePool,
    room_id: &str,
    update: &UpdateNoteRequest,
) -> Result<Option<Note>, sqlx::Error> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET content = COALESCE(?1, content),
            last_edited_by = COALESCE(?2, last_edited_by),
            updated_at = ?3
        WHERE room_id = ?4
        RETURNING id, room_id, title, content, created_by, last_edited_by, created_at, updated_at
        "#,
    )
    .bind(update.content.as_deref())
    .bind(update.username.as_deref())
    .bind(timestamp())
    .bind(room_id)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}
