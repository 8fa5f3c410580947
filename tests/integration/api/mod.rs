//! API integration tests
//!
//! Integration tests for the notes and presence endpoints

mod notes_test;
mod views_test;
