//! Editor Session
//!
//! State behind the room editor view: the note text, who is online, a local
//! activity log and the save indicator. The session never talks to the
//! network itself except in [`EditorSession::save_if_due`]; callers feed it
//! server events and local edits and send the events it returns.

use chrono::{DateTime, Local, Utc};
use tokio::time::Instant;

use crate::client::api::NotesApi;
use crate::client::debounce::SaveDebouncer;
use crate::client::error::ClientError;
use crate::shared::{AppConfig, ClientEvent, Note, RoomMember, ServerEvent, UpdateNoteRequest};

const SAVE_FAILED: &str = "Failed to save note. Please try again.";

/// Save indicator under the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing edited yet
    Idle,
    /// Local edits not yet persisted
    Syncing,
    Saved { at: DateTime<Utc> },
    Failed { message: String },
}

/// One line of the activity log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub time: DateTime<Utc>,
    pub text: String,
}

/// Editor state for one user in one room
#[derive(Debug, Clone)]
pub struct EditorSession {
    room_id: String,
    username: String,
    title: String,
    content: String,
    users: Vec<RoomMember>,
    activity: Vec<ActivityEntry>,
    save_status: SaveStatus,
    debouncer: SaveDebouncer,
}

impl EditorSession {
    /// Start editing a note loaded from the API
    pub fn new(note: &Note, username: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            room_id: note.room_id.clone(),
            username: username.into(),
            title: note.title.clone(),
            content: note.content.clone(),
            users: Vec::new(),
            activity: Vec::new(),
            save_status: SaveStatus::Idle,
            debouncer: SaveDebouncer::new(config.save_debounce),
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn users(&self) -> &[RoomMember] {
        &self.users
    }

    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Whether a member entry is this user (shown as "(You)")
    ///
    /// Matches on username, so two tabs of the same user both count.
    pub fn is_self(&self, member: &RoomMember) -> bool {
        member.username == self.username
    }

    /// Event announcing this user to the room
    pub fn join_event(&self) -> ClientEvent {
        ClientEvent::join_room(&self.room_id, &self.username)
    }

    /// Apply an event pushed by the server
    pub fn apply(&mut self, event: &ServerEvent) {
        match event {
            ServerEvent::Connected { .. } => {}
            ServerEvent::UserJoined(change) | ServerEvent::UserLeft(change) => {
                self.users = change.users.clone();
                self.log(change.message.clone());
            }
            ServerEvent::NoteUpdated(update) => {
                self.content = update.content.clone();
                self.log(format!("Note updated by {}", update.last_edited_by));
            }
            ServerEvent::Error { message } => {
                tracing::warn!("Server rejected a frame: {}", message);
                self.log(format!("Error: {}", message));
            }
        }
    }

    /// Apply a local edit
    ///
    /// Returns the `update_note` event to send right away and restarts the
    /// save window.
    pub fn edit(&mut self, content: impl Into<String>, now: Instant) -> ClientEvent {
        self.content = content.into();
        self.save_status = SaveStatus::Syncing;
        self.debouncer.touch(now);
        ClientEvent::update_note(&self.room_id, &self.username, &self.content)
    }

    /// When the pending save becomes due, if any
    pub fn save_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The save request if the debounce window has elapsed
    pub fn take_pending_save(&mut self, now: Instant) -> Option<UpdateNoteRequest> {
        self.debouncer
            .take_due(now)
            .then(|| UpdateNoteRequest::new(&self.content, &self.username))
    }

    pub fn mark_saved(&mut self, note: &Note) {
        // A newer edit may already have reopened the window
        if !self.debouncer.is_pending() {
            self.save_status = SaveStatus::Saved { at: note.updated_at };
        }
    }

    pub fn mark_save_failed(&mut self) {
        self.save_status = SaveStatus::Failed {
            message: SAVE_FAILED.to_string(),
        };
    }

    /// Persist the note through the API if the save window has elapsed
    ///
    /// # Returns
    ///
    /// The saved note, or `None` if no save was due.
    pub async fn save_if_due(
        &mut self,
        api: &NotesApi,
        now: Instant,
    ) -> Result<Option<Note>, ClientError> {
        let Some(request) = self.take_pending_save(now) else {
            return Ok(None);
        };

        match api.update_note(&self.room_id, &request).await {
            Ok(note) => {
                self.mark_saved(&note);
                Ok(Some(note))
            }
            Err(e) => {
                tracing::error!("Error updating note in room {}: {}", self.room_id, e);
                self.mark_save_failed();
                Err(e)
            }
        }
    }

    /// Append a line to the activity log
    pub fn log(&mut self, text: impl Into<String>) {
        self.activity.push(ActivityEntry {
            time: Utc::now(),
            text: text.into(),
        });
    }

    /// Text of the save indicator, if any
    pub fn status_line(&self) -> Option<String> {
        match &self.save_status {
            SaveStatus::Idle => None,
            SaveStatus::Syncing => Some("Syncing changes...".to_string()),
            SaveStatus::Saved { at } => Some(format!(
                "Last saved: {}",
                at.with_timezone(&Local).format("%H:%M:%S")
            )),
            SaveStatus::Failed { message } => Some(message.clone()),
        }
    }
}
