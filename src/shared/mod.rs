//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the client library. These types are used for serialization
//! over the notes HTTP API and the room socket.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP or WebSocket frames.

/// Note record and API request bodies
pub mod note;

/// Room socket events
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use note::{generate_room_id, CreateNoteRequest, NewNote, Note, UpdateNoteRequest};
pub use event::{ClientEvent, ConnectionId, RoomMember, ServerEvent};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
