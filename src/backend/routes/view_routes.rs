/**
 * View Routes
 *
 * The browser views are plain files under the configured public directory:
 *
 * - `GET /` - `index.html`, the home view (create or join a room)
 * - `GET /room/{room_id}` - `room.html`, the editor view
 * - `GET /static/{file}` - scripts and styles
 */

use std::path::Path;

use axum::{routing::get_service, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::server::state::AppState;

/// Configure the view and static asset routes
pub fn configure_view_routes(router: Router<AppState>, public_dir: &Path) -> Router<AppState> {
    router
        .route(
            "/",
            get_service(ServeFile::new(public_dir.join("index.html"))),
        )
        .route(
            "/room/{room_id}",
            get_service(ServeFile::new(public_dir.join("room.html"))),
        )
        .nest_service("/static", ServeDir::new(public_dir))
}
