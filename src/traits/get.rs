//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::api::Api;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier. The ID type is per entity: projects use a plain
/// integer id, users accept either an id or an email address.
///
/// # Example
///
/// ```ignore
/// use railapi::{Get, Project, TestRailClient};
///
/// let client = TestRailClient::from_env()?;
/// let project = Project::get(client.api(), 1234).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(api: &Api, id: Self::Id) -> Result<Self>;
}
