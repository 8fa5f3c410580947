//! Notes Backend Module
//!
//! Persistence and HTTP surface for the one-note-per-room store.
//!
//! - **`db`** - SQLite operations on the `notes` table
//! - **`handlers`** - `/api/notes` handlers

/// Database operations for notes
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_note, get_note, list_notes, update_note};
