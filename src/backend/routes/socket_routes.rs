use axum::Router;

use crate::backend::realtime::handle_socket_upgrade;
use crate::backend::server::state::AppState;

/// Configure the room socket (`GET /socket`)
pub fn configure_socket_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/socket", axum::routing::get(handle_socket_upgrade))
}
