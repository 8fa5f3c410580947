//! Real-time socket integration tests

mod editor_test;
mod socket_test;
