//! TestRail API client library.
//!
//! A Rust library for interacting with the TestRail REST API through a
//! [`TestRailClient`] facade backed by `Get`/`List` traits that entity
//! types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use railapi::TestRailClient;
//!
//! #[tokio::main]
//! async fn main() -> railapi::Result<()> {
//!     // Resolve credentials from the environment / ~/.railapi.toml
//!     let client = TestRailClient::from_env()?;
//!
//!     // Fetch a project by id
//!     let project = client.project(1234u64).await?;
//!     println!("Project: {}", project.name);
//!
//!     // List active projects
//!     let projects = client.projects(true, false).await?;
//!     println!("Found {} active projects", projects.len());
//!
//!     // List the templates of a project
//!     for template in client.templates(&project).await? {
//!         println!("Template: {}", template.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Polymorphic operations
//!
//! Several operations accept more than one argument shape, dispatched at
//! runtime through the closed [`Argument`] enum: `client.user(())` builds an
//! empty handle, `client.user(1234u64)` fetches by id, and
//! `client.user("a@b.com")` fetches by email. Shapes an operation has no
//! handler for produce [`TestRailError::UnsupportedArgument`] naming the
//! accepted shapes.
//!
//! # Configuration
//!
//! Credentials resolve from three sources, highest precedence first:
//!
//! 1. Explicit [`ClientConfig`] fields
//! 2. `TESTRAIL_USERNAME`, `TESTRAIL_USER_API_KEY` (or `TESTRAIL_PASSWORD`),
//!    `TESTRAIL_URL` environment variables
//! 3. `~/.railapi.toml`, `[testrail]` table
//!
//! When one source supplies both an API key and a password, the key wins.

mod api;
mod client;
mod collection;
mod credentials;
mod dispatch;
mod error;
mod models;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use api::Api;
pub use client::TestRailClient;
pub use collection::Collection;
pub use credentials::{
    ClientConfig, CONFIG_FILE_NAME, ENV_PASSWORD, ENV_URL, ENV_USERNAME, ENV_USER_API_KEY,
};
pub use dispatch::Argument;
pub use error::{Result, TestRailError};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    CaseType, Priority, Project, ProjectFilter, Status, Template, User, UserId,
};
