//! Real-time Room Module
//!
//! WebSocket fan-out of presence changes and note edits, scoped to rooms.
//!
//! # Architecture
//!
//! - **`broadcast`** - One broadcast channel per room, with optional sender exclusion
//! - **`connection`** - `GET /socket` upgrade and the per-connection session
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Per-room channels
//! └── connection.rs   - Socket sessions
//! ```
//!
//! # Wire Format
//!
//! Every frame is a JSON text message of the form `{"event": ..., "data": ...}`.
//!
//! Client to server:
//! - `join_room` with `{roomId, username}`
//! - `update_note` with `{roomId, username, content}`
//!
//! Server to client:
//! - `connected` with `{id}`, sent once when the socket opens
//! - `user_joined` / `user_left` with `{message, users}`, sent to the whole room
//! - `note_updated` with `{content, lastEditedBy, timestamp}`, sent to the room except the editor
//! - `error` with `{message}` for frames that could not be handled
//!
//! Edits relayed over the socket are not persisted; clients save through
//! `PATCH /api/notes/{roomId}`.

/// Per-room broadcast channels
pub mod broadcast;

/// Socket connection handling
pub mod connection;

pub use broadcast::{RoomBroadcast, RoomChannels};
pub use connection::{handle_socket_upgrade, SocketSession};
