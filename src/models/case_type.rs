//! Case type model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::collection::Collection;
use crate::error::{Result, TestRailError};
use crate::traits::List;

/// A TestRail case type (e.g., "Automated", "Functionality").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseType {
    /// The case type ID.
    pub id: u64,

    /// The case type name.
    pub name: String,

    /// Whether this is the installation's default case type.
    #[serde(default)]
    pub is_default: bool,
}

#[async_trait]
impl List for CaseType {
    type Query = ();

    #[tracing::instrument(skip(api))]
    async fn list(api: &Api, _query: ()) -> Result<Collection<Self>> {
        let response = api.get("get_case_types").await?;
        let case_types: Vec<CaseType> =
            response.json().await.map_err(TestRailError::HttpError)?;
        Ok(Collection::new(case_types))
    }
}
