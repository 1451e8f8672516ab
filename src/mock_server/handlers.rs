//! Request dispatch for the mock TestRail server.
//!
//! TestRail routes every call through one dispatcher script, with the method
//! and its arguments carried in the raw query string
//! (`/index.php?/api/v2/get_project/1&...`), so the mock server has a single
//! handler that parses the query and fans out.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// GET /index.php?/api/v2/{method}
pub async fn dispatch(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let state = state.read().await;

    if state.require_auth && !headers.contains_key("authorization") {
        return error(
            StatusCode::UNAUTHORIZED,
            "Authentication failed: invalid or missing user/password or session cookie.",
        );
    }

    let Some(method) = query.as_deref().and_then(|q| q.strip_prefix("/api/v2/")) else {
        return error(StatusCode::NOT_FOUND, "Unknown method.");
    };

    // First &-segment is the method (with any path-style argument); the
    // rest are key=value parameters.
    let mut segments = method.split('&');
    let method = segments.next().unwrap_or_default();
    let params: HashMap<&str, &str> = segments.filter_map(|s| s.split_once('=')).collect();

    let (name, arg) = match method.split_once('/') {
        Some((name, arg)) => (name, Some(arg)),
        None => (method, None),
    };

    match (name, arg) {
        ("get_projects", None) => {
            let is_completed = match params.get("is_completed") {
                Some(&"0") => Some(false),
                Some(&"1") => Some(true),
                Some(_) => {
                    return error(StatusCode::BAD_REQUEST, "Field :is_completed is not valid.")
                }
                None => None,
            };
            ok(&state.list_projects(is_completed))
        }
        ("get_project", Some(id)) => match parse_id(id, ":project_id") {
            Ok(id) => match state.get_project(id) {
                Some(project) => ok(project),
                None => error(StatusCode::BAD_REQUEST, "Field :project_id is not a valid ID."),
            },
            Err(response) => response,
        },
        ("get_users", None) => ok(&state.list_users()),
        ("get_user", Some(id)) => match parse_id(id, ":user_id") {
            Ok(id) => match state.get_user(id) {
                Some(user) => ok(user),
                None => error(StatusCode::BAD_REQUEST, "Field :user_id is not a valid ID."),
            },
            Err(response) => response,
        },
        ("get_user_by_email", None) => match params.get("email") {
            Some(email) => match state.get_user_by_email(email) {
                Some(user) => ok(user),
                None => error(
                    StatusCode::BAD_REQUEST,
                    "Field :email does not correspond to a valid user.",
                ),
            },
            None => error(StatusCode::BAD_REQUEST, "Field :email is required."),
        },
        ("get_templates", Some(id)) => match parse_id(id, ":project_id") {
            Ok(id) => match state.list_templates(id) {
                Some(templates) => ok(templates),
                None => error(StatusCode::BAD_REQUEST, "Field :project_id is not a valid ID."),
            },
            Err(response) => response,
        },
        ("get_case_types", None) => ok(&state.case_types),
        ("get_priorities", None) => ok(&state.priorities),
        ("get_statuses", None) => ok(&state.statuses),
        _ => error(StatusCode::NOT_FOUND, "Unknown method."),
    }
}

fn ok<T: Serialize>(body: &T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// TestRail error envelope: `{"error": "..."}`.
fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn parse_id(raw: &str, field: &str) -> Result<u64, Response> {
    raw.parse().map_err(|_| {
        error(
            StatusCode::BAD_REQUEST,
            &format!("Field {field} is not a valid ID."),
        )
    })
}
