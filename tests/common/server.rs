//! Test server helpers

use std::net::SocketAddr;
use std::time::Duration;

use roomnotes::backend::server::{create_app, ServerConfig};
use roomnotes::client::{NotesApi, RoomSocket};
use roomnotes::shared::{AppConfig, ServerEvent};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How long socket helpers wait for an event
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(2);

/// A server running in the test's runtime
pub struct TestServer {
    pub addr: SocketAddr,
    pub config: AppConfig,
    handle: JoinHandle<()>,
    _public_dir: tempfile::TempDir,
}

impl TestServer {
    /// Start a fresh server with its own in-memory database
    pub async fn spawn() -> Self {
        let public_dir = tempfile::tempdir().expect("create public dir");
        std::fs::write(public_dir.path().join("index.html"), "<h1>home</h1>").expect("write index");
        std::fs::write(public_dir.path().join("room.html"), "<h1>room</h1>").expect("write room");

        let server_config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            public_dir: public_dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let app = create_app(server_config).await.expect("create app");

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let config = AppConfig::builder()
            .server_url(format!("http://{}", addr))
            .build()
            .expect("client config");

        Self {
            addr,
            config,
            handle,
            _public_dir: public_dir,
        }
    }

    pub fn api(&self) -> NotesApi {
        NotesApi::new(self.config.clone())
    }

    pub async fn socket(&self) -> RoomSocket {
        RoomSocket::connect(&self.config).await.expect("connect socket")
    }

    /// Socket that has joined `room_id` and consumed its own `user_joined`
    pub async fn joined_socket(&self, room_id: &str, username: &str) -> RoomSocket {
        let mut socket = self.socket().await;
        socket.join_room(room_id, username).await.expect("join room");
        match next_event(&mut socket).await {
            ServerEvent::UserJoined(_) => socket,
            other => panic!("expected user_joined, got {:?}", other),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Next event, failing the test after `EVENT_TIMEOUT`
pub async fn next_event(socket: &mut RoomSocket) -> ServerEvent {
    tokio::time::timeout(EVENT_TIMEOUT, socket.next_event())
        .await
        .expect("timed out waiting for event")
        .expect("socket error")
}

/// Assert that nothing arrives within a short window
pub async fn assert_no_event(socket: &mut RoomSocket) {
    let result = tokio::time::timeout(Duration::from_millis(200), socket.next_event()).await;
    assert!(result.is_err(), "unexpected event: {:?}", result);
}
