//! Client Module
//!
//! Rust client for a roomnotes server, mirroring what the browser views do:
//!
//! - **`api`** - `NotesApi`, the HTTP notes and presence endpoints (reqwest)
//! - **`socket`** - `RoomSocket`, the typed room socket (tokio-tungstenite)
//! - **`session`** - `EditorSession`, editor state driven by socket events
//!   and local edits
//! - **`debounce`** - `SaveDebouncer`, the save window behind the editor
//!
//! # Example
//!
//! ```rust,no_run
//! use roomnotes::client::{EditorSession, NotesApi, RoomSocket};
//! use roomnotes::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().server_url("http://localhost:5000").build()?;
//! let api = NotesApi::new(config.clone());
//! let note = api.get_note("k3j9x0ab").await?;
//!
//! let mut session = EditorSession::new(&note, "alice", &config);
//! let mut socket = RoomSocket::connect(&config).await?;
//! socket.send(&session.join_event()).await?;
//!
//! let event = socket.next_event().await?;
//! session.apply(&event);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod debounce;
pub mod error;
pub mod session;
pub mod socket;

pub use api::NotesApi;
pub use debounce::SaveDebouncer;
pub use error::ClientError;
pub use session::{ActivityEntry, EditorSession, SaveStatus};
pub use socket::RoomSocket;
