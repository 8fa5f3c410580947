//! Roomnotes - Main Library
//!
//! A small real-time note-sharing service. Every room holds exactly one note,
//! persisted in SQLite. Users in a room see who else is online and receive
//! each other's edits live over a WebSocket; the editor persists its content
//! through the HTTP API shortly after the user stops typing.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both server and client
//!   - Note records and request bodies
//!   - Socket events and room members
//!   - Error types and client configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, notes API and room socket
//!   - SQLite persistence via sqlx
//!   - In-memory presence and per-room broadcast channels
//!
//! - **`client`** - Rust client library
//!   - HTTP and socket clients
//!   - Editor session model with debounced saving
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use roomnotes::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::load()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client library
pub mod client;
