//! Notes API tests

use pretty_assertions::assert_eq;
use roomnotes::shared::{generate_room_id, CreateNoteRequest, UpdateNoteRequest};

use crate::common::TestServer;
use crate::{assert_api_error, assert_ok};

#[tokio::test]
async fn test_create_and_fetch_note() {
    let server = TestServer::spawn().await;
    let api = server.api();
    let room_id = generate_room_id();

    let created = assert_ok!(
        api.create_note(&CreateNoteRequest::new("  Standup  ", &room_id, "alice"))
            .await
    );
    assert_eq!(created.title, "Standup");
    assert_eq!(created.room_id, room_id);
    assert_eq!(created.content, "");
    assert_eq!(created.created_by, "alice");
    assert_eq!(created.last_edited_by, "alice");

    let fetched = assert_ok!(api.get_note(&room_id).await);
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Standup");
}

#[tokio::test]
async fn test_create_with_initial_content() {
    let server = TestServer::spawn().await;
    let mut request = CreateNoteRequest::new("Plan", "plan0001", "alice");
    request.content = Some("first line".to_string());

    let created = assert_ok!(server.api().create_note(&request).await);
    assert_eq!(created.content, "first line");
}

#[tokio::test]
async fn test_duplicate_room_is_rejected() {
    let server = TestServer::spawn().await;
    let api = server.api();
    assert_ok!(api.create_note(&CreateNoteRequest::new("A", "dup00001", "alice")).await);

    assert_api_error!(
        api.create_note(&CreateNoteRequest::new("B", "dup00001", "bob")).await,
        400,
        "Note with this room ID already exists"
    );

    // The original note is untouched
    let note = assert_ok!(api.get_note("dup00001").await);
    assert_eq!(note.title, "A");
}

#[tokio::test]
async fn test_create_requires_fields() {
    let server = TestServer::spawn().await;
    let api = server.api();

    assert_api_error!(
        api.create_note(&CreateNoteRequest::new("   ", "room0001", "alice")).await,
        400,
        "Title is required"
    );
    assert_api_error!(
        api.create_note(&CreateNoteRequest::new("T", "", "alice")).await,
        400,
        "Room ID is required"
    );
    assert_api_error!(
        api.create_note(&CreateNoteRequest::new("T", "room0001", "")).await,
        400,
        "Username is required"
    );

    assert!(assert_ok!(api.list_notes().await).is_empty());
}

#[tokio::test]
async fn test_missing_note() {
    let server = TestServer::spawn().await;
    let api = server.api();

    assert_api_error!(api.get_note("nothere").await, 404, "Note not found");
    assert_api_error!(
        api.update_note("nothere", &UpdateNoteRequest::new("x", "alice")).await,
        404,
        "Note not found"
    );
}

#[tokio::test]
async fn test_update_note() {
    let server = TestServer::spawn().await;
    let api = server.api();
    let created = assert_ok!(api.create_note(&CreateNoteRequest::new("T", "room0001", "alice")).await);

    let updated = assert_ok!(
        api.update_note("room0001", &UpdateNoteRequest::new("hello", "bob"))
            .await
    );
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "hello");
    assert_eq!(updated.last_edited_by, "bob");
    assert_eq!(updated.created_by, "alice");
    assert_eq!(updated.title, "T");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let server = TestServer::spawn().await;
    let api = server.api();
    assert_ok!(api.create_note(&CreateNoteRequest::new("T", "room0001", "alice")).await);

    let request = UpdateNoteRequest {
        content: Some("only content".to_string()),
        username: None,
    };
    let updated = assert_ok!(api.update_note("room0001", &request).await);
    assert_eq!(updated.content, "only content");
    assert_eq!(updated.last_edited_by, "alice");
}

#[tokio::test]
async fn test_list_most_recent_first() {
    let server = TestServer::spawn().await;
    let api = server.api();
    for room in ["room0001", "room0002", "room0003"] {
        assert_ok!(api.create_note(&CreateNoteRequest::new(room, room, "alice")).await);
    }
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert_ok!(api.update_note("room0001", &UpdateNoteRequest::new("bump", "bob")).await);

    let notes = assert_ok!(api.list_notes().await);
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].room_id, "room0001");
}
