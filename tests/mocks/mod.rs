//! Centralized mocks and fixtures for testing
//!
//! This module provides reusable fixtures and a real HTTP test server
//! to reduce duplication across test files.

pub mod entities;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use entities::{BoardFixtures, TestConstants};
#[allow(unused_imports)]
pub use test_server::TestServer;
