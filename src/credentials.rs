//! Credential resolution for the TestRail client.
//!
//! Credentials are pulled from three sources, highest precedence first:
//!
//! 1. Explicit arguments ([`ClientConfig`]) passed at construction.
//! 2. Environment variables: `TESTRAIL_USERNAME`, `TESTRAIL_USER_API_KEY`,
//!    `TESTRAIL_PASSWORD`, `TESTRAIL_URL`.
//! 3. A config file at `~/.railapi.toml`:
//!
//!    ```toml
//!    [testrail]
//!    username = "user@example.com"
//!    user_api_key = "api-key"
//!    url = "https://example.testrail.net"
//!    ```
//!
//! `password` may be substituted for `user_api_key` in any source. When a
//! single source supplies both, the API key wins. The secret is decided by
//! the first source that supplies either field, so an explicit password
//! still beats an environment API key.
//!
//! Resolution happens once at client construction and is never retried.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TestRailError};

/// Environment variable holding the TestRail username.
pub const ENV_USERNAME: &str = "TESTRAIL_USERNAME";
/// Environment variable holding the TestRail API key.
pub const ENV_USER_API_KEY: &str = "TESTRAIL_USER_API_KEY";
/// Environment variable holding the TestRail password.
pub const ENV_PASSWORD: &str = "TESTRAIL_PASSWORD";
/// Environment variable holding the TestRail instance URL.
pub const ENV_URL: &str = "TESTRAIL_URL";

/// Config file name, looked up in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".railapi.toml";

/// Explicit credential arguments for client construction.
///
/// Every field is optional; missing fields fall through to the environment
/// and then to the config file.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// TestRail username (usually an email address).
    pub username: Option<String>,
    /// TestRail API key. Preferred over `password` when both are set.
    pub user_api_key: Option<String>,
    /// TestRail password.
    pub password: Option<String>,
    /// Base URL of the TestRail instance (e.g., `https://example.testrail.net`).
    pub url: Option<String>,
}

impl ClientConfig {
    /// The secret this source supplies, if any. API key wins over password
    /// within a single source.
    fn secret(&self) -> Option<&str> {
        self.user_api_key
            .as_deref()
            .or(self.password.as_deref())
    }

    /// Build a source from an environment-style lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            username: lookup(ENV_USERNAME),
            user_api_key: lookup(ENV_USER_API_KEY),
            password: lookup(ENV_PASSWORD),
            url: lookup(ENV_URL),
        }
    }

    /// Build a source from the process environment.
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a source from a config file. A missing or unreadable file is an
    /// empty source; a malformed file is logged and treated as empty so a
    /// stale config cannot break clients configured through other sources.
    fn from_file(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match toml::from_str::<ConfigFile>(&contents) {
            Ok(file) => Self {
                username: file.testrail.username,
                user_api_key: file.testrail.user_api_key,
                password: file.testrail.password,
                url: file.testrail.url,
            },
            Err(err) => {
                tracing::warn!("ignoring malformed {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Build a source from `~/.railapi.toml`, if the home directory is known.
    fn from_home_file() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::from_file(&home.join(CONFIG_FILE_NAME)),
            None => Self::default(),
        }
    }
}

/// Serde mapping of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    testrail: ConfigSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigSection {
    username: Option<String>,
    user_api_key: Option<String>,
    password: Option<String>,
    url: Option<String>,
}

/// Fully resolved credentials, held immutably for the client's lifetime.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub username: String,
    pub secret: String,
    pub base_url: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Resolve credentials from explicit arguments, the process environment,
    /// and the home-directory config file, in that order.
    pub(crate) fn resolve(explicit: &ClientConfig) -> Result<Self> {
        Self::resolve_sources(&[
            explicit.clone(),
            ClientConfig::from_env(),
            ClientConfig::from_home_file(),
        ])
    }

    /// Merge an ordered list of sources into complete credentials.
    ///
    /// `username` and `url` each resolve to the first source that supplies
    /// them. The secret resolves to the first source that supplies either
    /// `user_api_key` or `password`, with the API key winning within that
    /// source.
    fn resolve_sources(sources: &[ClientConfig]) -> Result<Self> {
        let username = sources
            .iter()
            .find_map(|s| s.username.clone())
            .ok_or_else(|| missing("username", ENV_USERNAME))?;

        let secret = sources
            .iter()
            .find_map(|s| s.secret().map(str::to_string))
            .ok_or_else(|| missing("user_api_key or password", ENV_USER_API_KEY))?;

        let base_url = sources
            .iter()
            .find_map(|s| s.url.clone())
            .ok_or_else(|| missing("url", ENV_URL))?;

        Ok(Self {
            username,
            secret,
            base_url,
        })
    }
}

fn missing(field: &str, env_var: &str) -> TestRailError {
    TestRailError::ConfigMissing(format!(
        "no {field} found; pass it explicitly, set {env_var}, or add it to ~/{CONFIG_FILE_NAME}"
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn explicit(
        username: Option<&str>,
        api_key: Option<&str>,
        password: Option<&str>,
        url: Option<&str>,
    ) -> ClientConfig {
        ClientConfig {
            username: username.map(String::from),
            user_api_key: api_key.map(String::from),
            password: password.map(String::from),
            url: url.map(String::from),
        }
    }

    #[test]
    fn test_explicit_wins_over_everything() {
        let sources = [
            explicit(Some("explicit-user"), Some("explicit-key"), None, Some("https://a")),
            explicit(Some("env-user"), Some("env-key"), None, Some("https://b")),
            explicit(Some("file-user"), Some("file-key"), None, Some("https://c")),
        ];

        let creds = Credentials::resolve_sources(&sources).unwrap();
        assert_eq!(creds.username, "explicit-user");
        assert_eq!(creds.secret, "explicit-key");
        assert_eq!(creds.base_url, "https://a");
    }

    #[test]
    fn test_missing_fields_fall_through() {
        let sources = [
            explicit(Some("explicit-user"), None, None, None),
            explicit(None, Some("env-key"), None, None),
            explicit(Some("file-user"), None, None, Some("https://file")),
        ];

        let creds = Credentials::resolve_sources(&sources).unwrap();
        assert_eq!(creds.username, "explicit-user");
        assert_eq!(creds.secret, "env-key");
        assert_eq!(creds.base_url, "https://file");
    }

    #[test]
    fn test_api_key_beats_password_in_same_source() {
        let sources = [explicit(
            Some("user"),
            Some("the-key"),
            Some("the-password"),
            Some("https://a"),
        )];

        let creds = Credentials::resolve_sources(&sources).unwrap();
        assert_eq!(creds.secret, "the-key");
    }

    #[test]
    fn test_explicit_password_beats_env_api_key() {
        // Secret precedence is per source, not per field: the first source
        // supplying either secret field decides.
        let sources = [
            explicit(Some("user"), None, Some("explicit-password"), Some("https://a")),
            explicit(None, Some("env-key"), None, None),
        ];

        let creds = Credentials::resolve_sources(&sources).unwrap();
        assert_eq!(creds.secret, "explicit-password");
    }

    #[test]
    fn test_env_api_key_used_when_explicit_has_no_secret() {
        let sources = [
            explicit(Some("user"), None, None, Some("https://a")),
            explicit(None, Some("env-key"), Some("env-password"), None),
        ];

        let creds = Credentials::resolve_sources(&sources).unwrap();
        assert_eq!(creds.secret, "env-key");
    }

    #[test]
    fn test_missing_username_is_an_error() {
        let sources = [explicit(None, Some("key"), None, Some("https://a"))];

        let err = Credentials::resolve_sources(&sources).unwrap_err();
        assert!(matches!(err, TestRailError::ConfigMissing(_)));
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let sources = [explicit(Some("user"), None, None, Some("https://a"))];

        let err = Credentials::resolve_sources(&sources).unwrap_err();
        assert!(err.to_string().contains("user_api_key or password"));
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let sources = [explicit(Some("user"), Some("key"), None, None)];

        let err = Credentials::resolve_sources(&sources).unwrap_err();
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_env_lookup_source() {
        let source = ClientConfig::from_lookup(|name| match name {
            ENV_USERNAME => Some("env-user".to_string()),
            ENV_PASSWORD => Some("env-password".to_string()),
            _ => None,
        });

        assert_eq!(source.username.as_deref(), Some("env-user"));
        assert_eq!(source.user_api_key, None);
        assert_eq!(source.secret(), Some("env-password"));
        assert_eq!(source.url, None);
    }

    #[test]
    fn test_config_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[testrail]\nusername = \"file-user\"\nuser_api_key = \"file-key\"\nurl = \"https://file.testrail.net\""
        )
        .unwrap();

        let source = ClientConfig::from_file(file.path());
        assert_eq!(source.username.as_deref(), Some("file-user"));
        assert_eq!(source.user_api_key.as_deref(), Some("file-key"));
        assert_eq!(source.url.as_deref(), Some("https://file.testrail.net"));
    }

    #[test]
    fn test_missing_config_file_is_empty_source() {
        let source = ClientConfig::from_file(Path::new("/nonexistent/.railapi.toml"));
        assert!(source.username.is_none());
        assert!(source.secret().is_none());
        assert!(source.url.is_none());
    }

    #[test]
    fn test_malformed_config_file_is_empty_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [").unwrap();

        let source = ClientConfig::from_file(file.path());
        assert!(source.username.is_none());
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials {
            username: "user".to_string(),
            secret: "super-secret".to_string(),
            base_url: "https://a".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user"));
        assert!(!debug.contains("super-secret"));
    }
}
