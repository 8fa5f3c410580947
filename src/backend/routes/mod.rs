//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation and middleware
//! ├── api_routes.rs     - Notes and presence JSON endpoints
//! ├── socket_routes.rs  - Room socket upgrade
//! └── view_routes.rs    - Browser views and static assets
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `GET /api/notes`, `POST /api/notes`
//! - `GET /api/notes/{room_id}`, `PATCH /api/notes/{room_id}`
//! - `GET /api/rooms/{room_id}/users`
//!
//! ## Socket
//!
//! - `GET /socket` - WebSocket upgrade for presence and live edits
//!
//! ## Views
//!
//! - `/` - Home view
//! - `/room/{room_id}` - Room editor view
//! - `/static/{file}` - Assets
//!
//! Anything else gets a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Socket route
pub mod socket_routes;

/// Browser view routes
pub mod view_routes;

pub use router::create_router;
