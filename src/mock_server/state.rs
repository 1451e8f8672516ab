//! Mock server state management.
//!
//! Provides the in-memory data store for the mock TestRail server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{CaseType, Priority, Project, Status, Template, User};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by id.
    pub projects: HashMap<u64, Project>,

    /// Users indexed by id.
    pub users: HashMap<u64, User>,

    /// Templates indexed by owning project id.
    pub templates: HashMap<u64, Vec<Template>>,

    /// Installation-wide case types.
    pub case_types: Vec<CaseType>,

    /// Installation-wide priorities.
    pub priorities: Vec<Priority>,

    /// Installation-wide test statuses.
    pub statuses: Vec<Status>,

    /// If set, requests without an Authorization header are rejected.
    pub require_auth: bool,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state. The project must carry an id.
    pub fn with_project(mut self, project: Project) -> Self {
        let id = project.id.expect("mock projects must have an id");
        self.projects.insert(id, project);
        self
    }

    /// Add a user to the state. The user must carry an id.
    pub fn with_user(mut self, user: User) -> Self {
        let id = user.id.expect("mock users must have an id");
        self.users.insert(id, user);
        self
    }

    /// Add a template to a project.
    pub fn with_template(mut self, project_id: u64, template: Template) -> Self {
        self.templates.entry(project_id).or_default().push(template);
        self
    }

    /// Require an Authorization header on every request.
    pub fn with_required_auth(mut self) -> Self {
        self.require_auth = true;
        self
    }

    /// Get a project by id.
    pub fn get_project(&self, id: u64) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Get a user by id.
    pub fn get_user(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    /// Get a user by email address.
    pub fn get_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    /// List projects, optionally filtered by completion state, sorted by id
    /// for deterministic responses.
    pub fn list_projects(&self, is_completed: Option<bool>) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .projects
            .values()
            .filter(|p| is_completed.map(|c| p.is_completed == c).unwrap_or(true))
            .collect();
        projects.sort_by_key(|p| p.id);
        projects
    }

    /// List users sorted by id.
    pub fn list_users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// List templates for a project.
    pub fn list_templates(&self, project_id: u64) -> Option<&Vec<Template>> {
        self.templates.get(&project_id)
    }
}
