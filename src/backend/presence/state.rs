use std::collections::HashMap;

use crate::shared::{ConnectionId, RoomMember};

/// A connection leaving one room on disconnect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub room_id: String,
    pub username: String,
    /// Members still in the room after removal
    pub remaining: Vec<RoomMember>,
}

/// Process-local room membership
///
/// Maps a room id to the ordered list of connections that joined it. Rooms
/// are created on first join and dropped as soon as their list is empty, so
/// an entry never holds an empty list.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: HashMap<String, Vec<RoomMember>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member to a room and return the member list
    ///
    /// Joining twice from the same connection appends a second entry.
    pub fn join(&mut self, room_id: &str, member: RoomMember) -> Vec<RoomMember> {
        let members = self.rooms.entry(room_id.to_string()).or_default();
        members.push(member);
        members.clone()
    }

    /// Remove a connection from every room it joined
    ///
    /// Only the first entry for the connection is removed from each room.
    /// Rooms left empty are deleted.
    pub fn remove_connection(&mut self, connection_id: &ConnectionId) -> Vec<Departure> {
        let mut departures = Vec::new();

        for (room_id, members) in self.rooms.iter_mut() {
            if let Some(index) = members.iter().position(|m| &m.id == connection_id) {
                let member = members.remove(index);
                departures.push(Departure {
                    room_id: room_id.clone(),
                    username: member.username,
                    remaining: members.clone(),
                });
            }
        }

        self.rooms.retain(|_, members| !members.is_empty());
        departures
    }

    /// Current members of a room
    pub fn members(&self, room_id: &str) -> Vec<RoomMember> {
        self.rooms.get(room_id).cloned().unwrap_or_default()
    }

    pub fn contains_room(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
