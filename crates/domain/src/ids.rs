use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of a platform identifier.
pub const MAX_ID_LENGTH: usize = 36;

/// Checks the platform identifier rules: 1-36 chars of `[A-Za-z0-9._-]`,
/// not starting with a special character.
pub fn validate_platform_id(value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::invalid_id("identifier cannot be empty"));
    }
    if value.len() > MAX_ID_LENGTH {
        return Err(DomainError::invalid_id(format!(
            "identifier cannot exceed {} characters: {}",
            MAX_ID_LENGTH, value
        )));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(DomainError::invalid_id(format!(
            "identifier contains invalid characters: {}",
            value
        )));
    }
    if value.starts_with(&['.', '-', '_'][..]) {
        return Err(DomainError::invalid_id(format!(
            "identifier cannot start with a special character: {}",
            value
        )));
    }
    Ok(())
}

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                validate_platform_id(&value)?;
                Ok(Self(value))
            }

            /// Simple (unhyphenated) form of a UUID, always a valid identifier.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid.simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Identity IDs
define_id!(UserId);
define_id!(SessionId);

// Content IDs (posts are keyed by their Slug)
define_id!(LikeId);
define_id!(CommentId);
define_id!(ProfileId);

// Storage IDs
define_id!(FileId);

impl ProfileId {
    /// Profiles created by this client are keyed by their owner.
    pub fn for_user(user_id: &UserId) -> Self {
        Self(user_id.as_str().to_string())
    }
}
