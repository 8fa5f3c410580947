//! Backend Module
//!
//! All server-side code for roomnotes: an Axum HTTP server that stores one
//! note per room in SQLite and relays presence and live edits over a
//! WebSocket.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Initialization, application state, configuration
//! - **`routes`** - Route configuration and router assembly
//! - **`notes`** - Note persistence and the `/api/notes` handlers
//! - **`presence`** - Room membership registry and the users endpoint
//! - **`realtime`** - Per-room broadcast channels and socket sessions
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── notes/          - Note store and handlers
//! ├── presence/       - Room membership
//! ├── realtime/       - Socket fan-out
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the room registry behind
//! `Arc<RwLock<>>`, and the per-room `tokio::sync::broadcast` channels.
//! Membership and channels live only in memory; notes are the only thing
//! persisted.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse` and renders `{"message": ..., "status": ...}`.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Note persistence and handlers
#[cfg(feature = "ssr")]
pub mod notes;

/// Room membership
#[cfg(feature = "ssr")]
pub mod presence;

/// Real-time room updates
#[cfg(feature = "ssr")]
pub mod realtime;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use presence::RoomRegistry;
#[cfg(feature = "ssr")]
pub use realtime::{handle_socket_upgrade, RoomChannels};
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
