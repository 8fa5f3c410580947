/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded `ServerConfig`:
 * 1. Open the SQLite pool and run migrations
 * 2. Create the room registry and broadcast channels
 * 3. Create and configure the router
 * 4. Start the periodic cleanup of idle room channels
 */

use std::time::Duration;

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// How often rooms without subscribers lose their channel
pub const CHANNEL_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated. Unlike the room
/// state, notes are the one thing the server cannot run without.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing roomnotes server");

    let db_pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config);
    tracing::info!("Room registry and broadcast channels initialized");

    let app = create_router(app_state.clone());

    spawn_channel_cleanup(app_state);
    tracing::info!("Router configured with periodic cleanup task");

    Ok(app)
}

fn spawn_channel_cleanup(app_state: AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CHANNEL_CLEANUP_INTERVAL);
        // First tick fires immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let removed = app_state.room_channels.cleanup_inactive_channels();
            tracing::debug!(
                "[Realtime] Cleaned up {} inactive room channels, {} remain",
                removed,
                app_state.room_channels.channel_count()
            );
        }
    });
}
