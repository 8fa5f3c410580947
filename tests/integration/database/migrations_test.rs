//! Schema tests for the embedded migrations

use roomnotes::backend::server::connect_database;

use crate::assert_ok;

#[tokio::test]
async fn test_migrations_create_notes_table() {
    let pool = assert_ok!(connect_database("sqlite::memory:").await);

    let columns: Vec<String> = assert_ok!(
        sqlx::query_scalar("SELECT name FROM pragma_table_info('notes') ORDER BY cid")
            .fetch_all(&pool)
            .await
    );
    assert_eq!(
        columns,
        vec![
            "id",
            "room_id",
            "title",
            "content",
            "created_by",
            "last_edited_by",
            "created_at",
            "updated_at",
        ]
    );
}

#[tokio::test]
async fn test_room_id_is_unique() {
    let pool = assert_ok!(connect_database("sqlite::memory:").await);
    let insert = "INSERT INTO notes (id, room_id, title, created_by, last_edited_by, created_at, updated_at) \
                  VALUES (?1, 'same0001', 't', 'u', 'u', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')";

    assert_ok!(sqlx::query(insert).bind(uuid::Uuid::new_v4()).execute(&pool).await);
    let second = sqlx::query(insert).bind(uuid::Uuid::new_v4()).execute(&pool).await;

    match second {
        Err(sqlx::Error::Database(e)) => assert!(e.is_unique_violation()),
        other => panic!("expected unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("notes.db").display());

    let first = assert_ok!(connect_database(&url).await);
    first.close().await;
    assert_ok!(connect_database(&url).await);
}
