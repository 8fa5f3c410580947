//! Presence Module
//!
//! Tracks which connections are in which room. The registry lives only in
//! process memory and is rebuilt from scratch on restart as clients rejoin.

/// Room membership registry
pub mod state;

/// HTTP handlers
pub mod handlers;

pub use handlers::get_room_users;
pub use state::{Departure, RoomRegistry};
