//! Property-based tests for socket events and room ids

use proptest::prelude::*;
use roomnotes::shared::{generate_room_id, ClientEvent, ServerEvent};

proptest! {
    #[test]
    fn test_client_event_parse_never_panics(frame in ".*") {
        let _ = ClientEvent::parse(&frame);
        let _ = ServerEvent::parse(&frame);
    }

    #[test]
    fn test_update_note_frame_preserves_content(
        room_id in "[a-z0-9]{8}",
        username in "\\PC{1,20}",
        content in "\\PC*",
    ) {
        let event = ClientEvent::update_note(room_id, username, content);
        let frame = event.to_frame().unwrap();
        prop_assert_eq!(ClientEvent::parse(&frame).unwrap(), event);
    }

    #[test]
    fn test_room_ids_are_short_and_url_safe(_ in 0..100u32) {
        let id = generate_room_id();
        prop_assert_eq!(id.len(), 8);
        prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
