//! E2E tests using the mock TestRail server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use railapi::mock_server::{Fixtures, MockServer, MockState};
use railapi::{TestRailClient, TestRailError};

fn client(server: &MockServer) -> TestRailClient {
    TestRailClient::with_credentials("user@example.com", "test-key", server.url()).unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let http = reqwest::Client::new();
    let result = http.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Project Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_list_and_get_project_workflow() {
    let server = MockServer::start().await;
    let client = client(&server);

    // Step 1: List all projects
    let projects = client
        .projects(false, false)
        .await
        .expect("Failed to list projects");

    assert!(!projects.is_empty(), "Expected at least one project");

    // Step 2: Get the first project by its id
    let first = projects.iter().next().unwrap();
    let project = client
        .project(first.id.unwrap())
        .await
        .expect("Failed to get project");

    assert_eq!(project.id, first.id);
    assert_eq!(project.name, first.name);

    server.shutdown().await;
}

#[tokio::test]
async fn test_project_filters_partition_the_fixtures() {
    let server = MockServer::start().await;
    let client = client(&server);

    let all = client.projects(false, false).await.unwrap();
    let active = client.projects(true, false).await.unwrap();
    let completed = client.projects(false, true).await.unwrap();

    assert_eq!(all.len(), active.len() + completed.len());
    assert!(active.iter().all(|p| p.is_active()));
    assert!(completed.iter().all(|p| p.is_completed));

    server.shutdown().await;
}

#[tokio::test]
async fn test_project_not_found_surfaces_api_error() {
    let server = MockServer::start().await;

    let err = client(&server).project(9999u64).await.unwrap_err();
    match err {
        TestRailError::ApiError {
            message,
            status_code,
        } => {
            assert!(message.contains("project_id"));
            assert_eq!(status_code, Some(400));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }

    server.shutdown().await;
}

// =============================================================================
// User Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_user_by_id_and_email_agree() {
    let server = MockServer::start().await;
    let client = client(&server);

    let users = client.users().await.expect("Failed to list users");
    let first = users.iter().next().unwrap().clone();

    let by_id = client.user(first.id.unwrap()).await.unwrap();
    let by_email = client.user(first.email.as_str()).await.unwrap();

    assert_eq!(by_id.id, by_email.id);
    assert_eq!(by_id.email, by_email.email);

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_email_surfaces_api_error() {
    let server = MockServer::start().await;

    let err = client(&server).user("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, TestRailError::ApiError { .. }));

    server.shutdown().await;
}

// =============================================================================
// Template Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_templates_through_a_fetched_project() {
    let server = MockServer::start().await;
    let client = client(&server);

    let project = client.project(1u64).await.unwrap();
    let templates = project.templates(&client).await.unwrap();

    assert_eq!(templates.len(), 2);
    assert!(templates.iter().any(|t| t.is_default));

    server.shutdown().await;
}

// =============================================================================
// System Table Tests
// =============================================================================

#[tokio::test]
async fn test_system_tables_are_served() {
    let server = MockServer::start().await;
    let client = client(&server);

    assert!(!client.case_types().await.unwrap().is_empty());
    assert!(!client.priorities().await.unwrap().is_empty());
    assert!(!client.statuses().await.unwrap().is_empty());

    server.shutdown().await;
}

// =============================================================================
// Auth Tests
// =============================================================================

#[tokio::test]
async fn test_required_auth_rejects_anonymous_requests() {
    let state = MockState::new()
        .with_project(Fixtures::project(1, "Datahub"))
        .with_required_auth();
    let server = MockServer::with_state(state).await;

    // The client always authenticates, so it passes.
    let project = client(&server).project(1u64).await.unwrap();
    assert_eq!(project.name, "Datahub");

    // A bare request without credentials is rejected.
    let http = reqwest::Client::new();
    let response = http
        .get(format!("{}/index.php?/api/v2/get_project/1", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    server.shutdown().await;
}

// =============================================================================
// State Mutation Tests
// =============================================================================

#[tokio::test]
async fn test_state_can_change_between_requests() {
    let server = MockServer::start_empty().await;
    let client = client(&server);

    assert!(client.project(42u64).await.is_err());

    {
        let state = server.state();
        let mut state = state.write().await;
        state.projects.insert(42, Fixtures::project(42, "Added Later"));
    }

    let project = client.project(42u64).await.unwrap();
    assert_eq!(project.name, "Added Later");

    server.shutdown().await;
}
