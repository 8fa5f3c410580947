/**
 * Real-time Event System
 *
 * This module defines the events exchanged over the room socket. Every
 * WebSocket text frame carries exactly one event encoded as
 *
 * ```json
 * {"event": "<name>", "data": { ... }}
 * ```
 *
 * `ClientEvent` covers what a browser or the client library sends,
 * `ServerEvent` what the server pushes back.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Identifier of one socket connection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a fresh random connection id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConnectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a room's online user list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMember {
    /// Connection that joined
    pub id: ConnectionId,
    /// Name the user joined with
    pub username: String,
}

impl RoomMember {
    pub fn new(id: ConnectionId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Payload of `join_room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoom {
    pub room_id: String,
    pub username: String,
}

/// Payload of `update_note`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEdit {
    pub room_id: String,
    pub username: String,
    pub content: String,
}

/// Events sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Enter a room and announce presence
    JoinRoom(JoinRoom),
    /// Relay the full new content to the rest of the room
    UpdateNote(NoteEdit),
}

impl ClientEvent {
    pub fn join_room(room_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self::JoinRoom(JoinRoom {
            room_id: room_id.into(),
            username: username.into(),
        })
    }

    pub fn update_note(
        room_id: impl Into<String>,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::UpdateNote(NoteEdit {
            room_id: room_id.into(),
            username: username.into(),
            content: content.into(),
        })
    }

    /// Parse one socket frame
    pub fn parse(frame: &str) -> Result<Self, SharedError> {
        serde_json::from_str(frame)
            .map_err(|e| SharedError::protocol(format!("invalid client event: {}", e)))
    }

    /// Encode as one socket frame
    pub fn to_frame(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Payload of `user_joined` and `user_left`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceChange {
    /// Human-readable line for the activity log
    pub message: String,
    /// Room member list after the change
    pub users: Vec<RoomMember>,
}

/// Payload of `note_updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdated {
    pub content: String,
    pub last_edited_by: String,
    pub timestamp: DateTime<Utc>,
}

/// Events pushed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// First frame on every connection
    Connected { id: ConnectionId },
    UserJoined(PresenceChange),
    UserLeft(PresenceChange),
    NoteUpdated(NoteUpdated),
    /// A client frame could not be handled
    Error { message: String },
}

impl ServerEvent {
    pub fn user_joined(username: &str, users: Vec<RoomMember>) -> Self {
        Self::UserJoined(PresenceChange {
            message: format!("{} joined the room", username),
            users,
        })
    }

    pub fn user_left(username: &str, users: Vec<RoomMember>) -> Self {
        Self::UserLeft(PresenceChange {
            message: format!("{} left the room", username),
            users,
        })
    }

    pub fn note_updated(edit: NoteEdit) -> Self {
        Self::NoteUpdated(NoteUpdated {
            content: edit.content,
            last_edited_by: edit.username,
            timestamp: Utc::now(),
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Wire name of the event, used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::UserJoined(_) => "user_joined",
            Self::UserLeft(_) => "user_left",
            Self::NoteUpdated(_) => "note_updated",
            Self::Error { .. } => "error",
        }
    }

    /// Parse one socket frame
    pub fn parse(frame: &str) -> Result<Self, SharedError> {
        serde_json::from_str(frame)
            .map_err(|e| SharedError::protocol(format!("invalid server event: {}", e)))
    }

    /// Encode as one socket frame
    pub fn to_frame(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}
