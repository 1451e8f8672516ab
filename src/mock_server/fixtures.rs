//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{TimeZone, Utc};

use crate::{CaseType, Priority, Project, Status, Template, User};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Default data served by [`MockServer::start`](super::MockServer::start).
pub struct DefaultScenario {
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub templates: Vec<(u64, Template)>,
    pub case_types: Vec<CaseType>,
    pub priorities: Vec<Priority>,
    pub statuses: Vec<Status>,
}

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create an active project.
    pub fn project(id: u64, name: &str) -> Project {
        Project {
            id: Some(id),
            name: name.to_string(),
            announcement: None,
            show_announcement: false,
            is_completed: false,
            completed_on: None,
            suite_mode: Some(1),
            url: Some(format!(
                "https://example.testrail.net/index.php?/projects/overview/{id}"
            )),
        }
    }

    /// Create a completed project.
    pub fn completed_project(id: u64, name: &str) -> Project {
        let mut project = Self::project(id, name);
        project.is_completed = true;
        project.completed_on = Utc.timestamp_opt(1_453_504_099, 0).single();
        project
    }

    // =========================================================================
    // User Fixtures
    // =========================================================================

    /// Create an active user.
    pub fn user(id: u64, name: &str, email: &str) -> User {
        User {
            id: Some(id),
            name: name.to_string(),
            email: email.to_string(),
            is_active: true,
        }
    }

    // =========================================================================
    // Template Fixtures
    // =========================================================================

    /// Create a template.
    pub fn template(id: u64, name: &str, is_default: bool) -> Template {
        Template {
            id,
            name: name.to_string(),
            is_default,
        }
    }

    // =========================================================================
    // System Table Fixtures
    // =========================================================================

    /// TestRail's stock case types.
    pub fn case_types() -> Vec<CaseType> {
        let names = [
            (1, "Automated", false),
            (2, "Functionality", false),
            (3, "Performance", false),
            (6, "Other", true),
        ];
        names
            .into_iter()
            .map(|(id, name, is_default)| CaseType {
                id,
                name: name.to_string(),
                is_default,
            })
            .collect()
    }

    /// TestRail's stock priorities.
    pub fn priorities() -> Vec<Priority> {
        let rows = [
            (1, "Don't Test", "1 - Don't", 1, false),
            (2, "Low", "2 - Low", 2, false),
            (3, "Medium", "3 - Medium", 3, true),
            (4, "High", "4 - High", 4, false),
            (5, "Critical", "5 - Critical", 5, false),
        ];
        rows.into_iter()
            .map(|(id, name, short, priority, is_default)| Priority {
                id,
                name: name.to_string(),
                short_name: Some(short.to_string()),
                priority,
                is_default,
            })
            .collect()
    }

    /// TestRail's stock test statuses.
    pub fn statuses() -> Vec<Status> {
        let rows = [
            (1, "passed", "Passed", true, false),
            (2, "blocked", "Blocked", true, false),
            (3, "untested", "Untested", false, true),
            (4, "retest", "Retest", false, false),
            (5, "failed", "Failed", true, false),
        ];
        rows.into_iter()
            .map(|(id, name, label, is_final, is_untested)| Status {
                id,
                name: name.to_string(),
                label: label.to_string(),
                color_bright: 12_709_313,
                color_dark: 6_667_107,
                color_medium: 9_820_525,
                is_final,
                is_system: true,
                is_untested,
            })
            .collect()
    }

    /// The scenario a freshly started mock server serves.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            projects: vec![
                Self::project(1, "Datahub"),
                Self::project(2, "Storefront"),
                Self::completed_project(3, "Legacy Portal"),
            ],
            users: vec![
                Self::user(1, "Alex Chen", "alex@example.com"),
                Self::user(2, "Sam Rivera", "sam@example.com"),
            ],
            templates: vec![
                (1, Self::template(1, "Test Case (Text)", true)),
                (1, Self::template(2, "Test Case (Steps)", false)),
                (2, Self::template(1, "Test Case (Text)", true)),
            ],
            case_types: Self::case_types(),
            priorities: Self::priorities(),
            statuses: Self::statuses(),
        }
    }
}
