//! Room socket tests over a real connection

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use roomnotes::shared::ServerEvent;

use crate::assert_ok;
use crate::common::{assert_no_event, next_event, TestServer};

#[tokio::test]
async fn test_connect_assigns_distinct_ids() {
    let server = TestServer::spawn().await;
    let first = server.socket().await;
    let second = server.socket().await;
    assert_ne!(first.connection_id(), second.connection_id());
}

#[tokio::test]
async fn test_join_broadcasts_presence() {
    let server = TestServer::spawn().await;
    let mut alice = server.joined_socket("room0001", "alice").await;

    let mut bob = server.socket().await;
    assert_ok!(bob.join_room("room0001", "bob").await);

    for socket in [&mut alice, &mut bob] {
        assert_matches!(next_event(socket).await, ServerEvent::UserJoined(change) => {
            assert_eq!(change.message, "bob joined the room");
            let names: Vec<_> = change.users.iter().map(|u| u.username.clone()).collect();
            assert_eq!(names, vec!["alice", "bob"]);
        });
    }

    let users = assert_ok!(server.api().room_users("room0001").await);
    assert_eq!(users.len(), 2);
    assert_eq!(&users[0].id, alice.connection_id());
}

#[tokio::test]
async fn test_edits_reach_others_only() {
    let server = TestServer::spawn().await;
    let mut alice = server.joined_socket("room0001", "alice").await;
    let mut bob = server.joined_socket("room0001", "bob").await;
    // alice also sees bob join
    assert_matches!(next_event(&mut alice).await, ServerEvent::UserJoined(_));

    assert_ok!(alice.update_note("room0001", "alice", "hello bob").await);

    assert_matches!(next_event(&mut bob).await, ServerEvent::NoteUpdated(update) => {
        assert_eq!(update.content, "hello bob");
        assert_eq!(update.last_edited_by, "alice");
    });
    assert_no_event(&mut alice).await;
}

#[tokio::test]
async fn test_rooms_are_isolated() {
    let server = TestServer::spawn().await;
    let mut alice = server.joined_socket("room0001", "alice").await;
    let mut carol = server.joined_socket("room0002", "carol").await;

    assert_ok!(alice.update_note("room0001", "alice", "private").await);
    assert_no_event(&mut carol).await;
}

#[tokio::test]
async fn test_disconnect_broadcasts_user_left() {
    let server = TestServer::spawn().await;
    let mut alice = server.joined_socket("room0001", "alice").await;
    let bob = server.joined_socket("room0001", "bob").await;
    assert_matches!(next_event(&mut alice).await, ServerEvent::UserJoined(_));

    assert_ok!(bob.close().await);

    assert_matches!(next_event(&mut alice).await, ServerEvent::UserLeft(change) => {
        assert_eq!(change.message, "bob left the room");
        assert_eq!(change.users.len(), 1);
        assert_eq!(change.users[0].username, "alice");
    });

    let users = assert_ok!(server.api().room_users("room0001").await);
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_last_member_leaving_empties_room() {
    let server = TestServer::spawn().await;
    let alice = server.joined_socket("room0001", "alice").await;
    assert_ok!(alice.close().await);

    // Give the server a moment to process the close
    let api = server.api();
    for _ in 0..20 {
        if assert_ok!(api.room_users("room0001").await).is_empty() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    panic!("room still has members after disconnect");
}

#[tokio::test]
async fn test_malformed_frame_keeps_connection() {
    let server = TestServer::spawn().await;
    let mut socket = server.socket().await;

    assert_ok!(socket.send_raw("not json").await);
    assert_matches!(next_event(&mut socket).await, ServerEvent::Error { .. });

    assert_ok!(socket.join_room("room0001", "alice").await);
    assert_matches!(next_event(&mut socket).await, ServerEvent::UserJoined(_));
}
