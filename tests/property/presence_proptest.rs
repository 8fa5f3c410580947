//! Property-based tests for room membership

use std::collections::HashMap;

use proptest::prelude::*;
use roomnotes::backend::presence::RoomRegistry;
use roomnotes::shared::{ConnectionId, RoomMember};

#[derive(Debug, Clone)]
enum Op {
    Join { room: u8, connection: u8 },
    Leave { connection: u8 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..4u8, 0..6u8).prop_map(|(room, connection)| Op::Join { room, connection }),
        1 => (0..6u8).prop_map(|connection| Op::Leave { connection }),
    ]
}

fn connection_id(n: u8) -> ConnectionId {
    ConnectionId::from(format!("c{}", n).as_str())
}

proptest! {
    /// The registry matches a naive model: joins append, a disconnect
    /// removes the first entry per room, and no room is ever left empty.
    #[test]
    fn test_registry_matches_model(ops in proptest::collection::vec(op(), 0..60)) {
        let mut registry = RoomRegistry::new();
        let mut model: HashMap<String, Vec<ConnectionId>> = HashMap::new();

        for op in ops {
            match op {
                Op::Join { room, connection } => {
                    let room_id = format!("r{}", room);
                    let id = connection_id(connection);
                    let members = registry.join(&room_id, RoomMember::new(id.clone(), format!("user{}", connection)));
                    let expected = model.entry(room_id).or_default();
                    expected.push(id);
                    prop_assert_eq!(members.len(), expected.len());
                }
                Op::Leave { connection } => {
                    let id = connection_id(connection);
                    let departures = registry.remove_connection(&id);

                    let mut affected = 0;
                    for ids in model.values_mut() {
                        if let Some(index) = ids.iter().position(|m| m == &id) {
                            ids.remove(index);
                            affected += 1;
                        }
                    }
                    model.retain(|_, ids| !ids.is_empty());

                    prop_assert_eq!(departures.len(), affected);
                    for departure in &departures {
                        let expected = model.get(&departure.room_id).map(Vec::len).unwrap_or(0);
                        prop_assert_eq!(departure.remaining.len(), expected);
                    }
                }
            }

            prop_assert_eq!(registry.room_count(), model.len());
            for (room_id, ids) in &model {
                let members: Vec<ConnectionId> =
                    registry.members(room_id).into_iter().map(|m| m.id).collect();
                prop_assert_eq!(&members, ids);
            }
        }
    }
}
