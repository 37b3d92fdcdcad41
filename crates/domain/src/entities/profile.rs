//! Profile entity - public details about a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FileId, ProfileId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub avatar: Option<FileId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields supplied by the owner.
///
/// Optional fields left as `None` default to empty on create and are left
/// untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileData {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<FileId>,
}

impl ProfileData {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar: FileId) -> Self {
        self.avatar = Some(avatar);
        self
    }
}
