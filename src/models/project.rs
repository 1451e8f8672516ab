//! Project model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::client::TestRailClient;
use crate::collection::Collection;
use crate::error::{Result, TestRailError};
use crate::models::template::Template;
use crate::traits::{Get, List};

/// A TestRail project.
///
/// Projects are the top-level containers in TestRail; suites, runs, and
/// templates all hang off a project. An instance with `id: None` is an
/// empty handle created locally (via `client.project(())`) rather than
/// fetched from the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// The project ID. `None` for a locally created handle.
    #[serde(default)]
    pub id: Option<u64>,

    /// The project name.
    #[serde(default)]
    pub name: String,

    /// Announcement text shown on the project overview.
    #[serde(default)]
    pub announcement: Option<String>,

    /// Whether the announcement is displayed.
    #[serde(default)]
    pub show_announcement: bool,

    /// Whether the project has been marked completed.
    #[serde(default)]
    pub is_completed: bool,

    /// When the project was completed (unix timestamp on the wire).
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub completed_on: Option<DateTime<Utc>>,

    /// The suite mode (1 = single suite, 2 = single + baselines, 3 = multi).
    #[serde(default)]
    pub suite_mode: Option<u8>,

    /// Web URL of the project overview page.
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    /// Whether this project is still active (not completed).
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }

    /// List the templates available in this project.
    ///
    /// The project must carry an id (i.e., it must have been fetched, not
    /// built as an empty handle).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let project = client.project(1234u64).await?;
    /// for template in project.templates(&client).await? {
    ///     println!("{}", template.name);
    /// }
    /// ```
    pub async fn templates(&self, client: &TestRailClient) -> Result<Collection<Template>> {
        client.templates(self).await
    }
}

/// Filters for listing projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    /// Restrict the listing to completed (`Some(true)`) or active
    /// (`Some(false)`) projects. `None` lists everything.
    pub is_completed: Option<bool>,
}

#[async_trait]
impl Get for Project {
    type Id = u64;

    #[tracing::instrument(skip(api))]
    async fn get(api: &Api, id: u64) -> Result<Self> {
        let response = api.get(&format!("get_project/{id}")).await?;
        let project: Project = response.json().await.map_err(TestRailError::HttpError)?;
        Ok(project)
    }
}

#[async_trait]
impl List for Project {
    type Query = ProjectFilter;

    #[tracing::instrument(skip(api))]
    async fn list(api: &Api, query: ProjectFilter) -> Result<Collection<Self>> {
        let method = match query.is_completed {
            Some(completed) => format!("get_projects&is_completed={}", u8::from(completed)),
            None => "get_projects".to_string(),
        };

        let response = api.get(&method).await?;
        let projects: Vec<Project> = response.json().await.map_err(TestRailError::HttpError)?;
        Ok(Collection::new(projects))
    }
}
