//! Template model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::collection::Collection;
use crate::error::{Result, TestRailError};
use crate::traits::List;

/// A TestRail case template (field layout), scoped to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// The template ID.
    pub id: u64,

    /// The template name.
    pub name: String,

    /// Whether this is the project's default template.
    #[serde(default)]
    pub is_default: bool,
}

#[async_trait]
impl List for Template {
    /// Templates are always listed for a project, identified by id.
    type Query = u64;

    #[tracing::instrument(skip(api))]
    async fn list(api: &Api, project_id: u64) -> Result<Collection<Self>> {
        let response = api.get(&format!("get_templates/{project_id}")).await?;
        let templates: Vec<Template> =
            response.json().await.map_err(TestRailError::HttpError)?;
        Ok(Collection::new(templates))
    }
}
