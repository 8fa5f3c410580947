//! End-to-end editor flow: live relay plus debounced persistence

use std::time::Duration;

use assert_matches::assert_matches;
use roomnotes::client::{EditorSession, SaveStatus};
use roomnotes::shared::{CreateNoteRequest, ServerEvent};
use tokio::time::Instant;

use crate::assert_ok;
use crate::common::{next_event, TestServer};

#[tokio::test]
async fn test_two_editors_share_a_note() {
    let server = TestServer::spawn().await;
    let api = server.api();
    let note = assert_ok!(api.create_note(&CreateNoteRequest::new("Shared", "room0001", "alice")).await);

    let mut alice = EditorSession::new(&note, "alice", &server.config);
    let mut bob = EditorSession::new(&note, "bob", &server.config);

    let mut alice_socket = server.socket().await;
    assert_ok!(alice_socket.send(&alice.join_event()).await);
    alice.apply(&next_event(&mut alice_socket).await);

    let mut bob_socket = server.socket().await;
    assert_ok!(bob_socket.send(&bob.join_event()).await);
    bob.apply(&next_event(&mut bob_socket).await);
    alice.apply(&next_event(&mut alice_socket).await);

    assert_eq!(alice.users().len(), 2);
    assert_eq!(bob.users().len(), 2);
    assert!(bob.users().iter().any(|u| bob.is_self(u)));

    // Alice types; bob sees it live
    let start = Instant::now();
    let edit = alice.edit("meeting at 10", start);
    assert_ok!(alice_socket.send(&edit).await);

    let event = next_event(&mut bob_socket).await;
    assert_matches!(&event, ServerEvent::NoteUpdated(_));
    bob.apply(&event);
    assert_eq!(bob.content(), "meeting at 10");
    assert_eq!(
        bob.activity().last().map(|a| a.text.as_str()),
        Some("Note updated by alice")
    );

    // Nothing is saved inside the debounce window
    assert!(assert_ok!(alice.save_if_due(&api, start).await).is_none());
    assert_eq!(assert_ok!(api.get_note("room0001").await).content, "");

    // After the window the content is persisted
    let later = start + server.config.save_debounce + Duration::from_millis(1);
    let saved = assert_ok!(alice.save_if_due(&api, later).await).expect("save was due");
    assert_eq!(saved.content, "meeting at 10");
    assert_eq!(saved.last_edited_by, "alice");
    assert_matches!(alice.save_status(), SaveStatus::Saved { .. });

    let stored = assert_ok!(api.get_note("room0001").await);
    assert_eq!(stored.content, "meeting at 10");
}

#[tokio::test]
async fn test_save_failure_is_reported() {
    let server = TestServer::spawn().await;
    let api = server.api();
    let note = assert_ok!(api.create_note(&CreateNoteRequest::new("T", "room0001", "alice")).await);

    // Session pointed at a room with no note
    let mut ghost = note.clone();
    ghost.room_id = "ghost001".to_string();
    let mut session = EditorSession::new(&ghost, "alice", &server.config);

    let start = Instant::now();
    session.edit("lost", start);
    let result = session.save_if_due(&api, start + Duration::from_secs(1)).await;

    assert!(result.unwrap_err().is_not_found());
    assert_eq!(
        session.status_line().as_deref(),
        Some("Failed to save note. Please try again.")
    );
}
