//! Error types for TestRail API operations.

use thiserror::Error;

/// Errors that can occur during TestRail API operations.
#[derive(Debug, Error)]
pub enum TestRailError {
    /// Credential resolution failed: a required field was not supplied by
    /// any source (explicit arguments, environment, config file).
    #[error("TestRail configuration required: {0}")]
    ConfigMissing(String),

    /// A dispatched operation was invoked with an argument shape it has no
    /// handler for.
    #[error("`{operation}` cannot be called with {received}; accepted: {accepted}")]
    UnsupportedArgument {
        operation: &'static str,
        received: &'static str,
        accepted: &'static str,
    },

    /// A dispatched operation was invoked without an argument, and its
    /// no-argument form is not implemented.
    #[error("`{operation}` requires an argument; accepted: {accepted}")]
    NotImplemented {
        operation: &'static str,
        accepted: &'static str,
    },

    /// Email address failed the minimal sanity check.
    #[error("\"email\" must be a string that includes an \"@\" symbol, got '{0}'")]
    InvalidEmail(String),

    /// Two mutually exclusive filter flags were both set.
    #[error("either `{first}` or `{second}` can be set, but not both")]
    ExclusiveFilters {
        first: &'static str,
        second: &'static str,
    },

    /// API request failed.
    #[error("TestRail API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

/// Result type alias for TestRail operations.
pub type Result<T> = core::result::Result<T, TestRailError>;
