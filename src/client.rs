//! TestRail API client facade.
//!
//! [`TestRailClient`] is the primary access point: it resolves credentials
//! at construction and exposes the public operations, dispatching on the
//! shape of their argument where an operation is polymorphic.

use crate::api::Api;
use crate::collection::Collection;
use crate::credentials::{ClientConfig, Credentials};
use crate::dispatch::Argument;
use crate::error::{Result, TestRailError};
use crate::models::{CaseType, Priority, Project, ProjectFilter, Status, Template, User, UserId};
use crate::traits::{Get, List};

/// The primary access point for the TestRail API.
///
/// # Example
///
/// ```no_run
/// use railapi::{ClientConfig, TestRailClient};
///
/// # async fn example() -> railapi::Result<()> {
/// // Resolve credentials from explicit arguments, falling back to
/// // TESTRAIL_* environment variables and ~/.railapi.toml.
/// let client = TestRailClient::new(ClientConfig {
///     username: Some("user@example.com".to_string()),
///     user_api_key: Some("api-key".to_string()),
///     url: Some("https://example.testrail.net".to_string()),
///     ..Default::default()
/// })?;
///
/// let project = client.project(1234u64).await?;
/// println!("{}", project.name);
/// # Ok(())
/// # }
/// ```
///
/// Polymorphic operations take `impl Into<Argument>`; pass `()` for the
/// no-argument form:
///
/// ```no_run
/// # async fn example(client: railapi::TestRailClient) -> railapi::Result<()> {
/// let handle = client.user(()).await?;            // empty handle, no request
/// let by_id = client.user(1234u64).await?;        // GET get_user/1234
/// let by_email = client.user("a@b.com").await?;   // GET get_user_by_email
/// # Ok(())
/// # }
/// ```
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct TestRailClient {
    api: Api,
}

impl TestRailClient {
    /// Create a client, resolving credentials from `config`, then the
    /// `TESTRAIL_*` environment variables, then `~/.railapi.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`TestRailError::ConfigMissing`] if the username, secret
    /// (API key or password), or URL cannot be resolved from any source,
    /// or [`TestRailError::UrlError`] if the resolved URL does not parse.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let credentials = Credentials::resolve(&config)?;
        Ok(Self {
            api: Api::new(credentials)?,
        })
    }

    /// Create a client from the environment and config file alone.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a client with fully explicit credentials.
    ///
    /// `secret` may be an API key or a password; TestRail accepts either.
    pub fn with_credentials(username: &str, secret: &str, url: &str) -> Result<Self> {
        Self::new(ClientConfig {
            username: Some(username.to_string()),
            user_api_key: Some(secret.to_string()),
            password: None,
            url: Some(url.to_string()),
        })
    }

    /// The low-level transport, for direct endpoint access via the
    /// [`Get`] and [`List`] traits.
    pub fn api(&self) -> &Api {
        &self.api
    }

    // ------------------------------------------------------------------
    // Write generics
    //
    // No concrete handlers are registered at this level; every shape is
    // rejected. Kept synchronous since they never reach the transport.
    // ------------------------------------------------------------------

    /// Add (create) an object in TestRail. Not implemented for any type.
    pub fn add(&self, obj: impl Into<Argument>) -> Result<()> {
        Self::no_handler("add", obj.into())
    }

    /// Close an object in TestRail. Not implemented for any type.
    pub fn close(&self, obj: impl Into<Argument>) -> Result<()> {
        Self::no_handler("close", obj.into())
    }

    /// Delete an object from TestRail. Not implemented for any type.
    pub fn delete(&self, obj: impl Into<Argument>) -> Result<()> {
        Self::no_handler("delete", obj.into())
    }

    /// Update an object in TestRail. Not implemented for any type.
    pub fn update(&self, obj: impl Into<Argument>) -> Result<()> {
        Self::no_handler("update", obj.into())
    }

    fn no_handler(operation: &'static str, arg: Argument) -> Result<()> {
        Err(TestRailError::UnsupportedArgument {
            operation,
            received: arg.kind(),
            accepted: "nothing; no concrete handler is registered",
        })
    }

    // ------------------------------------------------------------------
    // Case types
    // ------------------------------------------------------------------

    /// List all case types.
    pub async fn case_types(&self) -> Result<Collection<CaseType>> {
        CaseType::list(&self.api, ()).await
    }

    // ------------------------------------------------------------------
    // Priorities
    // ------------------------------------------------------------------

    /// List all priorities.
    pub async fn priorities(&self) -> Result<Collection<Priority>> {
        Priority::list(&self.api, ()).await
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Return a project.
    ///
    /// - `project(())` returns a new empty [`Project`] handle (no request)
    /// - `project(1234u64)` fetches the project with that id
    pub async fn project(&self, arg: impl Into<Argument>) -> Result<Project> {
        const ACCEPTED: &str = "no argument (new handle) or an integer project id";

        match arg.into() {
            Argument::None => Ok(Project::default()),
            Argument::Id(id) => Project::get(&self.api, id).await,
            other => Err(TestRailError::UnsupportedArgument {
                operation: "project",
                received: other.kind(),
                accepted: ACCEPTED,
            }),
        }
    }

    /// List projects.
    ///
    /// Leaving both flags unset lists every project. `active_only` and
    /// `completed_only` are mutually exclusive.
    ///
    /// # Errors
    ///
    /// Returns [`TestRailError::ExclusiveFilters`] if both flags are set.
    pub async fn projects(
        &self,
        active_only: bool,
        completed_only: bool,
    ) -> Result<Collection<Project>> {
        if active_only && completed_only {
            return Err(TestRailError::ExclusiveFilters {
                first: "active_only",
                second: "completed_only",
            });
        }

        let is_completed = if completed_only {
            Some(true)
        } else if active_only {
            Some(false)
        } else {
            None
        };

        Project::list(&self.api, ProjectFilter { is_completed }).await
    }

    // ------------------------------------------------------------------
    // Statuses
    // ------------------------------------------------------------------

    /// List all test statuses.
    pub async fn statuses(&self) -> Result<Collection<Status>> {
        Status::list(&self.api, ()).await
    }

    // ------------------------------------------------------------------
    // Templates
    // ------------------------------------------------------------------

    /// List the templates of a project, given as a [`Project`] or an
    /// integer project id.
    ///
    /// # Errors
    ///
    /// Returns [`TestRailError::NotImplemented`] when called without an
    /// argument, and a dispatch error for a [`Project`] handle that has no
    /// id or for any other shape.
    pub async fn templates(&self, arg: impl Into<Argument>) -> Result<Collection<Template>> {
        const ACCEPTED: &str = "a Project or an integer project id";

        match arg.into() {
            Argument::Id(project_id) => Template::list(&self.api, project_id).await,
            Argument::Project(project) => match project.id {
                Some(project_id) => Template::list(&self.api, project_id).await,
                None => Err(TestRailError::UnsupportedArgument {
                    operation: "templates",
                    received: "a Project handle with no id",
                    accepted: ACCEPTED,
                }),
            },
            Argument::None => Err(TestRailError::NotImplemented {
                operation: "templates",
                accepted: ACCEPTED,
            }),
            other => Err(TestRailError::UnsupportedArgument {
                operation: "templates",
                received: other.kind(),
                accepted: ACCEPTED,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Return a user.
    ///
    /// - `user(())` returns a new empty [`User`] handle (no request)
    /// - `user(1234u64)` fetches the user with that id
    /// - `user("a@b.com")` fetches the user with that email address
    ///
    /// # Errors
    ///
    /// Returns [`TestRailError::InvalidEmail`] for a string without an
    /// `@`, and a dispatch error for any other shape.
    pub async fn user(&self, arg: impl Into<Argument>) -> Result<User> {
        const ACCEPTED: &str =
            "no argument (new handle), an integer user id, or an email string";

        match arg.into() {
            Argument::None => Ok(User::default()),
            Argument::Id(id) => User::get(&self.api, UserId::Id(id)).await,
            Argument::Text(email) => User::get(&self.api, UserId::Email(email)).await,
            other => Err(TestRailError::UnsupportedArgument {
                operation: "user",
                received: other.kind(),
                accepted: ACCEPTED,
            }),
        }
    }

    /// List all users.
    pub async fn users(&self) -> Result<Collection<User>> {
        User::list(&self.api, ()).await
    }
}
