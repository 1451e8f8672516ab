//! Priority model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::collection::Collection;
use crate::error::{Result, TestRailError};
use crate::traits::List;

/// A TestRail case priority (e.g., "Critical", "Must Test").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priority {
    /// The priority ID.
    pub id: u64,

    /// The full priority name.
    pub name: String,

    /// Abbreviated name shown in compact views.
    #[serde(default)]
    pub short_name: Option<String>,

    /// Sort order; higher means more important.
    pub priority: u32,

    /// Whether this is the installation's default priority.
    #[serde(default)]
    pub is_default: bool,
}

#[async_trait]
impl List for Priority {
    type Query = ();

    #[tracing::instrument(skip(api))]
    async fn list(api: &Api, _query: ()) -> Result<Collection<Self>> {
        let response = api.get("get_priorities").await?;
        let priorities: Vec<Priority> =
            response.json().await.map_err(TestRailError::HttpError)?;
        Ok(Collection::new(priorities))
    }
}
