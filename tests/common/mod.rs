//! Common test utilities and helpers
//!
//! - A real server on an ephemeral port backed by in-memory SQLite
//! - Socket helpers with timeouts
//! - Custom assertion macros

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "ssr")]
pub use server::*;
