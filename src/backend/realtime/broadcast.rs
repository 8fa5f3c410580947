/**
 * Room Broadcasting
 *
 * Each room gets its own `tokio::sync::broadcast` channel. Connections
 * subscribe when they join a room; publishing to a room reaches every
 * subscribed connection. An optional origin lets a connection skip its own
 * edits.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;

use crate::shared::{ConnectionId, ServerEvent};

/// An event published to a room
#[derive(Debug, Clone)]
pub struct RoomBroadcast {
    /// Connection that caused the event; it does not receive it back
    pub origin: Option<ConnectionId>,
    pub event: ServerEvent,
}

impl RoomBroadcast {
    /// Event delivered to every subscriber of the room
    pub fn to_all(event: ServerEvent) -> Self {
        Self {
            origin: None,
            event,
        }
    }

    /// Event delivered to every subscriber except `origin`
    pub fn from_connection(origin: ConnectionId, event: ServerEvent) -> Self {
        Self {
            origin: Some(origin),
            event,
        }
    }

    /// Whether `connection_id` should receive this event
    pub fn is_for(&self, connection_id: &ConnectionId) -> bool {
        self.origin.as_ref() != Some(connection_id)
    }
}

/// Per-room broadcast channels
#[derive(Clone)]
pub struct RoomChannels {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<RoomBroadcast>>>>,
    capacity: usize,
}

impl RoomChannels {
    /// Create an empty set of channels; each room buffers up to `capacity` events
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, broadcast::Sender<RoomBroadcast>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to a room, creating its channel if needed
    pub fn subscribe(&self, room_id: &str) -> broadcast::Receiver<RoomBroadcast> {
        let capacity = self.capacity;
        self.lock()
            .entry(room_id.to_string())
            .or_insert_with(|| broadcast::channel(capacity).0)
            .subscribe()
    }

    /// Publish to a room
    ///
    /// # Returns
    ///
    /// Number of subscribers the event was queued for (0 if the room has no
    /// subscribers)
    pub fn broadcast(&self, room_id: &str, message: RoomBroadcast) -> usize {
        let name = message.event.name();
        let Some(sender) = self.lock().get(room_id).cloned() else {
            tracing::debug!("[Realtime] No channel for room {}, dropping {}", room_id, name);
            return 0;
        };

        match sender.send(message) {
            Ok(subscriber_count) => {
                tracing::debug!(
                    "[Realtime] {} broadcast to {} subscribers in room {}",
                    name,
                    subscriber_count,
                    room_id
                );
                subscriber_count
            }
            Err(_) => {
                tracing::debug!("[Realtime] No subscribers in room {} for {}", room_id, name);
                0
            }
        }
    }

    /// Drop channels that no connection is subscribed to
    ///
    /// # Returns
    ///
    /// Number of channels removed
    pub fn cleanup_inactive_channels(&self) -> usize {
        let mut channels = self.lock();
        let before = channels.len();
        channels.retain(|_, sender| sender.receiver_count() > 0);
        before - channels.len()
    }

    /// Number of connections subscribed to a room
    pub fn subscriber_count(&self, room_id: &str) -> usize {
        self.lock()
            .get(room_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    pub fn channel_count(&self) -> usize {
        self.lock().len()
    }
}
