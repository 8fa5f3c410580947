/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (notes, presence)
 * 2. Socket route
 * 3. View routes (home, room, static assets)
 * 4. Fallback handler (JSON 404)
 *
 * # Middleware
 *
 * - CORS: only `CLIENT_URL` when configured, any origin otherwise
 * - `TraceLayer` for request/response spans
 */

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::socket_routes::configure_socket_routes;
use crate::backend::routes::view_routes::configure_view_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state; its config supplies the public
///   directory and the allowed CORS origin
pub fn create_router(app_state: AppState) -> Router<()> {
    let config = app_state.config.clone();

    let router = Router::new();
    let router = configure_api_routes(router);
    let router = configure_socket_routes(router);
    let router = configure_view_routes(router, &config.public_dir);

    router
        .fallback(route_not_found)
        .layer(cors_layer(config.client_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn route_not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

fn cors_layer(client_origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    match client_origin {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => layer.allow_origin(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CLIENT_URL '{}', allowing any origin", origin);
                layer.allow_origin(Any)
            }
        },
        None => layer.allow_origin(Any),
    }
}
