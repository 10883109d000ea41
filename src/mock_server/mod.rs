//! Mock objects API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the objects
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests, so a
//! created object can be fetched, updated and deleted in the same run.
//!
//! # Example
//!
//! ```ignore
//! use objectsapi::mock_server::MockServer;
//! use objectsapi::{ObjectsClient, ObjectRecord, Get};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ObjectsClient::new(server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let object = ObjectRecord::get(&client, "1".to_string()).await.unwrap();
//!     assert_eq!(object.name, "Google Pixel 6 Pro");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
