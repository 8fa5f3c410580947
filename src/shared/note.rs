/**
 * Note Data Structure
 *
 * This module defines the Note record persisted once per room, together with
 * the request bodies accepted by the notes API.
 *
 * The types are shared between the server and the client library, so the
 * JSON shape (camelCase field names) is defined in exactly one place.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Length of ids produced by [`generate_room_id`]
pub const ROOM_ID_LENGTH: usize = 8;

/// A shared note, one per room
///
/// `room_id` is the unique key and never changes after creation. `content`
/// is overwritten by every save (last writer wins) and `last_edited_by`
/// records who performed that save.
///
/// # Example
/// ```json
/// {
///   "id": "4f7c1c52-1f43-4d2b-9d0c-2a4f3c6e8a11",
///   "roomId": "k3j9x0ab",
///   "title": "Standup",
///   "content": "",
///   "createdBy": "alice",
///   "lastEditedBy": "alice",
///   "createdAt": "2024-05-01T09:00:00Z",
///   "updatedAt": "2024-05-01T09:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note ID
    pub id: Uuid,
    /// Room the note belongs to (unique)
    pub room_id: String,
    /// Note title
    pub title: String,
    /// Full note body
    pub content: String,
    /// Username that created the note
    pub created_by: String,
    /// Username of the last save
    pub last_edited_by: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Time of the last save
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/notes`
///
/// Missing fields deserialize as empty so that [`CreateNoteRequest::validate`]
/// can report which one is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub username: String,
}

/// Body of `PATCH /api/notes/{roomId}`
///
/// An absent field leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A validated note ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub room_id: String,
    pub title: String,
    pub content: String,
    pub created_by: String,
}

impl CreateNoteRequest {
    pub fn new(
        title: impl Into<String>,
        room_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: None,
            room_id: room_id.into(),
            username: username.into(),
        }
    }

    /// Validate the request and produce the record to insert
    ///
    /// The title is trimmed. Title, room id and username must be non-empty
    /// after trimming; content defaults to an empty string.
    pub fn validate(self) -> Result<NewNote, SharedError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(SharedError::validation("title", "Title is required"));
        }
        if self.room_id.trim().is_empty() {
            return Err(SharedError::validation("roomId", "Room ID is required"));
        }
        if self.username.trim().is_empty() {
            return Err(SharedError::validation("username", "Username is required"));
        }

        Ok(NewNote {
            room_id: self.room_id,
            title,
            content: self.content.unwrap_or_default(),
            created_by: self.username,
        })
    }
}

impl UpdateNoteRequest {
    pub fn new(content: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            username: Some(username.into()),
        }
    }
}

/// Generate a random room id
///
/// Ids are [`ROOM_ID_LENGTH`] lowercase alphanumeric characters, short enough
/// to read out loud and paste into the join form.
pub fn generate_room_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ROOM_ID_LENGTH);
    id
}
