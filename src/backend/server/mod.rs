//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Layered configuration and database pool
//! └── init.rs         - App creation and background tasks
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, TOML file, environment
//! 2. **Database**: SQLite pool plus migrations
//! 3. **State Creation**: room registry and per-room channels
//! 4. **Router Creation**: API, socket, views and middleware
//! 5. **Background Tasks**: idle channel cleanup
//!
//! # Example
//!
//! ```rust,no_run
//! use roomnotes::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{connect_database, ServerConfig};
pub use init::create_app;
pub use state::AppState;
