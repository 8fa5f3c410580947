/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container, holding:
 * - The SQLite pool for persisted notes
 * - The room registry (who is online where)
 * - Per-room broadcast channels for socket fan-out
 * - The loaded server configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the part they
 * need, e.g. `State<SqlitePool>` for the notes API.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::backend::presence::RoomRegistry;
use crate::backend::realtime::RoomChannels;
use crate::backend::server::config::ServerConfig;

/// Shared state of the running server
#[derive(Clone)]
pub struct AppState {
    /// Note persistence
    pub db_pool: SqlitePool,

    /// Room membership
    ///
    /// Wrapped in `Arc<RwLock<>>` so the users endpoint can read while a
    /// socket session writes.
    pub room_registry: Arc<RwLock<RoomRegistry>>,

    /// Per-room broadcast channels
    pub room_channels: RoomChannels,

    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: ServerConfig) -> Self {
        Self {
            db_pool,
            room_registry: Arc::new(RwLock::new(RoomRegistry::new())),
            room_channels: RoomChannels::new(config.channel_capacity),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<RwLock<RoomRegistry>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.room_registry.clone()
    }
}

impl FromRef<AppState> for RoomChannels {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.room_channels.clone()
    }
}
