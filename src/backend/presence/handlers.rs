use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use tokio::sync::RwLock;

use crate::backend::presence::state::RoomRegistry;
use crate::shared::RoomMember;

/// Online users of a room (GET /api/rooms/{room_id}/users)
///
/// Unknown rooms have no members and return an empty list.
pub async fn get_room_users(
    State(registry): State<Arc<RwLock<RoomRegistry>>>,
    Path(room_id): Path<String>,
) -> Json<Vec<RoomMember>> {
    Json(registry.read().await.members(&room_id))
}
