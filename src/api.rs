//! Low-level TestRail API transport.
//!
//! Owns the HTTP connection pool, the resolved credentials, and TestRail's
//! legacy URL scheme. Entity-specific operations are implemented via the
//! `Get` and `List` traits on model types, and surfaced through
//! [`TestRailClient`](crate::TestRailClient).

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::credentials::Credentials;
use crate::error::{Result, TestRailError};

const USER_AGENT: &str = concat!("railapi/", env!("CARGO_PKG_VERSION"));

/// Low-level TestRail API transport.
///
/// Every endpoint lives behind a single dispatcher script, so request URLs
/// look like `https://instance.testrail.net/index.php?/api/v2/get_project/1`,
/// with additional filters appended as `&key=value`. Authentication is HTTP
/// basic auth; TestRail accepts an API key or a password interchangeably as
/// the basic-auth secret.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
#[derive(Clone)]
pub struct Api {
    http: Client,
    base_url: Arc<Url>,
    username: String,
    secret: String,
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Api {
    /// Build the transport from resolved credentials.
    pub(crate) fn new(credentials: Credentials) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if credentials.base_url.ends_with('/') {
            credentials.base_url.clone()
        } else {
            format!("{}/", credentials.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(TestRailError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            username: credentials.username,
            secret: credentials.secret,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for an API method like `get_project/1` or
    /// `get_projects&is_completed=1`.
    fn endpoint(&self, method: &str) -> Result<Url> {
        let mut url = self.base_url.join("index.php")?;
        url.set_query(Some(&format!("/api/v2/{method}")));
        Ok(url)
    }

    /// Make a GET request against an API method.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, method: &str) -> Result<Response> {
        let url = self.endpoint(method)?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(&self.secret))
            .send()
            .await
            .map_err(TestRailError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with a JSON body against an API method.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, method: &str, body: &B) -> Result<Response> {
        let url = self.endpoint(method)?;

        let response = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.secret))
            .json(body)
            .send()
            .await
            .map_err(TestRailError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // TestRail signals request throttling with 429 + Retry-After
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(TestRailError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        Err(TestRailError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// TestRail wraps errors as `{"error": "..."}`.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}
