//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::api::Api;
use crate::collection::Collection;
use crate::error::Result;

/// List entities with optional filtering.
///
/// TestRail's listing endpoints return whole arrays rather than pages, so a
/// listing is a single request whose decoded records are materialized into a
/// [`Collection`].
///
/// # Example
///
/// ```ignore
/// use railapi::{List, Project, ProjectFilter, TestRailClient};
///
/// let client = TestRailClient::from_env()?;
/// let projects = Project::list(client.api(), ProjectFilter::default()).await?;
/// ```
#[async_trait]
pub trait List: Sized {
    /// Query parameters for filtering. `()` for unfiltered endpoints.
    type Query: Send;

    /// List entities matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(api: &Api, query: Self::Query) -> Result<Collection<Self>>;
}
