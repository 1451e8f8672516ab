//! User model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::collection::Collection;
use crate::error::{Result, TestRailError};
use crate::traits::{Get, List};

/// A TestRail user.
///
/// An instance with `id: None` is an empty handle created locally (via
/// `client.user(())`) rather than fetched from the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// The user ID. `None` for a locally created handle.
    #[serde(default)]
    pub id: Option<u64>,

    /// Full display name.
    #[serde(default)]
    pub name: String,

    /// Email address the user signs in with.
    #[serde(default)]
    pub email: String,

    /// Whether the account is active.
    #[serde(default)]
    pub is_active: bool,
}

/// Identifier accepted by [`User::get`]: a numeric id or an email address.
#[derive(Debug, Clone)]
pub enum UserId {
    /// Numeric user id.
    Id(u64),
    /// Email address. Must contain an `@`; this is a minimal sanity check,
    /// not full address validation.
    Email(String),
}

#[async_trait]
impl Get for User {
    type Id = UserId;

    #[tracing::instrument(skip(api))]
    async fn get(api: &Api, id: UserId) -> Result<Self> {
        let method = match id {
            UserId::Id(id) => format!("get_user/{id}"),
            UserId::Email(email) => {
                if !email.contains('@') {
                    return Err(TestRailError::InvalidEmail(email));
                }
                format!("get_user_by_email&email={email}")
            }
        };

        let response = api.get(&method).await?;
        let user: User = response.json().await.map_err(TestRailError::HttpError)?;
        Ok(user)
    }
}

#[async_trait]
impl List for User {
    type Query = ();

    #[tracing::instrument(skip(api))]
    async fn list(api: &Api, _query: ()) -> Result<Collection<Self>> {
        let response = api.get("get_users").await?;
        let users: Vec<User> = response.json().await.map_err(TestRailError::HttpError)?;
        Ok(Collection::new(users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_an_empty_handle() {
        let user = User::default();
        assert_eq!(user.id, None);
        assert_eq!(user.email, "");
        assert!(!user.is_active);
    }

    #[test]
    fn test_user_deserializes() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "name": "Alex Chen", "email": "alex@example.com", "is_active": true}"#,
        )
        .unwrap();

        assert_eq!(user.id, Some(3));
        assert_eq!(user.name, "Alex Chen");
        assert_eq!(user.email, "alex@example.com");
        assert!(user.is_active);
    }
}
