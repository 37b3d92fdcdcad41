//! Platform configuration from the environment.

use std::time::Duration;

use url::Url;

use crate::infrastructure::ports::Collection;

/// Default origin used to build OAuth return URLs.
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:5173";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid URL in {key}: {message}")]
    InvalidUrl { key: &'static str, message: String },

    #[error("Invalid value in {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Collection ids of the blog database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionIds {
    pub posts: String,
    pub likes: String,
    pub comments: String,
    pub profiles: String,
}

impl CollectionIds {
    pub fn get(&self, collection: Collection) -> &str {
        match collection {
            Collection::Posts => &self.posts,
            Collection::Likes => &self.likes,
            Collection::Comments => &self.comments,
            Collection::Profiles => &self.profiles,
        }
    }
}

/// Everything needed to reach the platform project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub endpoint: Url,
    pub project_id: String,
    pub database_id: String,
    pub collections: CollectionIds,
    pub bucket_id: String,
    pub oauth_success_url: Url,
    pub oauth_failure_url: Url,
    pub timeout: Duration,
}

impl PlatformConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let endpoint = parse_url("APPWRITE_URL", &require("APPWRITE_URL")?)?;
        if endpoint.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                key: "APPWRITE_URL",
                message: "endpoint must be a hierarchical URL".to_string(),
            });
        }

        let origin = get("APP_ORIGIN").unwrap_or_else(|| DEFAULT_APP_ORIGIN.to_string());
        let origin = origin.trim_end_matches('/');

        let oauth_success_url = match get("APPWRITE_SUCCESS_URL") {
            Some(url) => parse_url("APPWRITE_SUCCESS_URL", &url)?,
            None => parse_url("APP_ORIGIN", &format!("{}/success", origin))?,
        };
        let oauth_failure_url = match get("APPWRITE_FAILURE_URL") {
            Some(url) => parse_url("APPWRITE_FAILURE_URL", &url)?,
            None => parse_url("APP_ORIGIN", &format!("{}/failure", origin))?,
        };

        let timeout = match get("APPWRITE_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    key: "APPWRITE_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            endpoint,
            project_id: require("APPWRITE_PROJECT_ID")?,
            database_id: require("APPWRITE_DATABASE_ID")?,
            collections: CollectionIds {
                posts: require("APPWRITE_COLLECTION_ID")?,
                likes: require("APPWRITE_LIKES_ID")?,
                comments: require("APPWRITE_COMMENTS_ID")?,
                profiles: require("APPWRITE_PROFILES_ID")?,
            },
            bucket_id: require("APPWRITE_BUCKET_ID")?,
            oauth_success_url,
            oauth_failure_url,
            timeout,
        })
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        key,
        message: e.to_string(),
    })
}

/// Load `.env.local` then `.env` from the workspace root, when present.
///
/// Variables already set in the process take precedence.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
