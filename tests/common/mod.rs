//! Shared helpers for wiremock-based tests.

// Each test binary compiles this module independently and uses a subset.
#![allow(dead_code)]

use railapi::TestRailClient;
use wiremock::{Match, MockServer, Request};

pub const USERNAME: &str = "user@example.com";
pub const API_KEY: &str = "test-key";

/// Client pointed at a wiremock server with fully explicit credentials.
pub fn test_client(server: &MockServer) -> TestRailClient {
    TestRailClient::with_credentials(USERNAME, API_KEY, &server.uri()).unwrap()
}

/// Matches a TestRail API method by raw query string.
///
/// TestRail carries the method in the query (`/index.php?/api/v2/...`),
/// which is not a key=value query, so the stock `query_param` matchers
/// don't apply; this compares the raw query instead.
pub struct ApiMethod(pub &'static str);

impl Match for ApiMethod {
    fn matches(&self, request: &Request) -> bool {
        let expected = format!("/api/v2/{}", self.0);
        request.url.path() == "/index.php" && request.url.query() == Some(expected.as_str())
    }
}
