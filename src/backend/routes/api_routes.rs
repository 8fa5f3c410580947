/**
 * API Routes
 *
 * ## Notes
 * - `GET /api/notes` - List notes
 * - `POST /api/notes` - Create a room's note
 * - `GET /api/notes/{room_id}` - Fetch a room's note
 * - `PATCH /api/notes/{room_id}` - Save a room's note
 *
 * ## Presence
 * - `GET /api/rooms/{room_id}/users` - Online users of a room
 */

use axum::Router;

use crate::backend::notes::{create_note, get_note, list_notes, update_note};
use crate::backend::presence::get_room_users;
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/notes",
            axum::routing::get(list_notes).post(create_note),
        )
        .route(
            "/api/notes/{room_id}",
            axum::routing::get(get_note).patch(update_note),
        )
        .route(
            "/api/rooms/{room_id}/users",
            axum::routing::get(get_room_users),
        )
}
