//! Status model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::collection::Collection;
use crate::error::{Result, TestRailError};
use crate::traits::List;

/// A TestRail test status (e.g., "Passed", "Blocked", "Failed").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    /// The status ID.
    pub id: u64,

    /// Internal status name.
    pub name: String,

    /// Display label.
    pub label: String,

    /// Display colors as 24-bit RGB values.
    #[serde(default)]
    pub color_bright: u32,
    #[serde(default)]
    pub color_dark: u32,
    #[serde(default)]
    pub color_medium: u32,

    /// Whether the status closes a test (e.g., passed/failed).
    #[serde(default)]
    pub is_final: bool,

    /// Whether this is a built-in system status.
    #[serde(default)]
    pub is_system: bool,

    /// Whether the status marks a test as untested.
    #[serde(default)]
    pub is_untested: bool,
}

#[async_trait]
impl List for Status {
    type Query = ();

    #[tracing::instrument(skip(api))]
    async fn list(api: &Api, _query: ()) -> Result<Collection<Self>> {
        let response = api.get("get_statuses").await?;
        let statuses: Vec<Status> =
            response.json().await.map_err(TestRailError::HttpError)?;
        Ok(Collection::new(statuses))
    }
}
