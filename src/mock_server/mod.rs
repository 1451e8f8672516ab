//! Mock TestRail API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates a TestRail
//! instance for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server maintains state across
//! requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use railapi::mock_server::MockServer;
//! use railapi::TestRailClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client =
//!         TestRailClient::with_credentials("user@example.com", "key", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = client.project(1u64).await.unwrap();
//!     assert_eq!(project.name, "Datahub");
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
