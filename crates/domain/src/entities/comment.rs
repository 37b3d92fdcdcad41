//! Comment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{CommentId, UserId};
use crate::value_objects::Slug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: Slug,
    pub user_id: UserId,
    /// Author name captured when the comment was written
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_written_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// A comment about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: Slug,
    pub user_id: UserId,
    pub username: String,
    pub content: String,
}

impl NewComment {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the content is blank.
    pub fn new(
        post_id: Slug,
        user_id: UserId,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation("Comment cannot be empty"));
        }
        Ok(Self {
            post_id,
            user_id,
            username: username.into(),
            content,
        })
    }
}
