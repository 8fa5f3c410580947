/**
 * Room Socket Connections
 *
 * This module implements the WebSocket endpoint at `GET /socket`. Every
 * connection gets a `SocketSession` that:
 *
 * - announces its connection id with a `connected` event
 * - handles `join_room` by subscribing to the room channel, appending to the
 *   room registry and broadcasting `user_joined` to the whole room
 * - handles `update_note` by relaying the full content to the rest of the room
 * - on disconnect, removes itself from every room and broadcasts `user_left`
 *
 * Outbound events go through a bounded mpsc channel drained by a writer
 * task, so room forwarders never touch the socket directly. A socket that
 * reads slowly fills its queue, and its forwarders then fall behind on the
 * room channels and skip events instead of buffering them.
 */

use std::collections::HashMap;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::backend::realtime::broadcast::RoomBroadcast;
use crate::backend::server::state::AppState;
use crate::shared::event::{JoinRoom, NoteEdit};
use crate::shared::{ClientEvent, ConnectionId, RoomMember, ServerEvent};

/// Upgrade handler (GET /socket)
pub async fn handle_socket_upgrade(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

/// Drive one WebSocket connection until the client goes away
pub async fn handle_socket(socket: WebSocket, app_state: AppState) {
    let (mut sink, mut stream) = socket.split();
    let capacity = app_state.config.channel_capacity.max(1);
    let (outbound_tx, mut outbound_rx) = mpsc::channel::<ServerEvent>(capacity);

    let mut session = SocketSession::new(app_state, outbound_tx);
    let connection_id = session.connection_id().clone();
    tracing::info!("[Realtime] New client connected: {}", connection_id);

    let writer = tokio::spawn(async move {
        while let Some(event) = outbound_rx.recv().await {
            let frame = match event.to_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("[Realtime] Failed to serialize {}: {}", event.name(), e);
                    continue;
                }
            };
            if let Err(e) = sink.send(Message::Text(frame.into())).await {
                tracing::debug!("[Realtime] Socket write failed: {}", e);
                break;
            }
        }
    });

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => session.handle_frame(text.as_str()).await,
            Ok(Message::Binary(_)) => {
                session
                    .send(ServerEvent::error("binary frames are not supported"))
                    .await;
            }
            Ok(Message::Close(_)) => break,
            // Ping/pong replies are handled by axum
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("[Realtime] Socket read failed for {}: {}", connection_id, e);
                break;
            }
        }
    }

    session.disconnect().await;
    writer.abort();
    tracing::info!("[Realtime] Client disconnected: {}", connection_id);
}

/// Server-side state of one socket connection
pub struct SocketSession {
    connection_id: ConnectionId,
    app_state: AppState,
    outbound: mpsc::Sender<ServerEvent>,
    /// Room id -> task forwarding that room's broadcasts to `outbound`
    subscriptions: HashMap<String, JoinHandle<()>>,
}

impl SocketSession {
    /// Start a session and queue its `connected` event
    ///
    /// `outbound` must be empty; the `connected` event is its first entry.
    pub fn new(app_state: AppState, outbound: mpsc::Sender<ServerEvent>) -> Self {
        let session = Self {
            connection_id: ConnectionId::generate(),
            app_state,
            outbound,
            subscriptions: HashMap::new(),
        };
        let connected = ServerEvent::Connected {
            id: session.connection_id.clone(),
        };
        if session.outbound.try_send(connected).is_err() {
            tracing::warn!("[Realtime] Could not queue connected event for {}", session.connection_id);
        }
        session
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    /// Queue an event for this connection only
    pub async fn send(&self, event: ServerEvent) {
        if self.outbound.send(event).await.is_err() {
            tracing::debug!("[Realtime] Outbound closed for {}", self.connection_id);
        }
    }

    /// Handle one text frame from the client
    ///
    /// Frames that do not parse are answered with an `error` event; the
    /// connection stays open.
    pub async fn handle_frame(&mut self, frame: &str) {
        match ClientEvent::parse(frame) {
            Ok(event) => self.handle_event(event).await,
            Err(e) => {
                tracing::warn!("[Realtime] Bad frame from {}: {}", self.connection_id, e);
                self.send(ServerEvent::error(e.to_string())).await;
            }
        }
    }

    pub async fn handle_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::JoinRoom(join) => self.join_room(join).await,
            ClientEvent::UpdateNote(edit) => self.update_note(edit),
        }
    }

    async fn join_room(&mut self, join: JoinRoom) {
        self.subscribe(&join.room_id);

        let mut registry = self.app_state.room_registry.write().await;
        if !registry.contains_room(&join.room_id) {
            tracing::debug!("[Presence] Room {} created", join.room_id);
        }
        let members = registry.join(
            &join.room_id,
            RoomMember::new(self.connection_id.clone(), join.username.clone()),
        );
        tracing::info!("[Presence] {} joined room: {}", join.username, join.room_id);

        // Published under the write lock so snapshots go out in registry order
        self.app_state.room_channels.broadcast(
            &join.room_id,
            RoomBroadcast::to_all(ServerEvent::user_joined(&join.username, members)),
        );
    }

    fn update_note(&self, edit: NoteEdit) {
        let room_id = edit.room_id.clone();
        tracing::debug!(
            "[Realtime] {} edited room {} ({} bytes)",
            edit.username,
            room_id,
            edit.content.len()
        );

        self.app_state.room_channels.broadcast(
            &room_id,
            RoomBroadcast::from_connection(self.connection_id.clone(), ServerEvent::note_updated(edit)),
        );
    }

    /// Subscribe to a room's channel once per connection
    fn subscribe(&mut self, room_id: &str) {
        if self.subscriptions.contains_key(room_id) {
            return;
        }

        let receiver = self.app_state.room_channels.subscribe(room_id);
        let forwarder = tokio::spawn(forward_room_events(
            receiver,
            self.connection_id.clone(),
            room_id.to_string(),
            self.outbound.clone(),
        ));
        self.subscriptions.insert(room_id.to_string(), forwarder);
    }

    /// Leave every room and tell the remaining members
    pub async fn disconnect(mut self) {
        for (_, forwarder) in self.subscriptions.drain() {
            forwarder.abort();
        }

        let mut registry = self.app_state.room_registry.write().await;
        let departures = registry.remove_connection(&self.connection_id);

        for departure in departures {
            tracing::info!("[Presence] {} left room: {}", departure.username, departure.room_id);
            self.app_state.room_channels.broadcast(
                &departure.room_id,
                RoomBroadcast::to_all(ServerEvent::user_left(&departure.username, departure.remaining)),
            );
        }
        tracing::debug!("[Presence] {} rooms active", registry.room_count());
    }
}

impl Drop for SocketSession {
    fn drop(&mut self) {
        for (_, forwarder) in self.subscriptions.drain() {
            forwarder.abort();
        }
    }
}

/// Copy a room's broadcasts into one connection's outbound queue
async fn forward_room_events(
    mut receiver: broadcast::Receiver<RoomBroadcast>,
    connection_id: ConnectionId,
    room_id: String,
    outbound: mpsc::Sender<ServerEvent>,
) {
    loop {
        match receiver.recv().await {
            Ok(message) => {
                if !message.is_for(&connection_id) {
                    continue;
                }
                // Waits while the connection's queue is full
                if outbound.send(message.event).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(
                    "[Realtime] {} lagged in room {}, skipped {} events",
                    connection_id,
                    room_id,
                    skipped
                );
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
