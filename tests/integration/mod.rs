//! Integration tests against a running server

pub mod api;
pub mod database;
pub mod realtime;
