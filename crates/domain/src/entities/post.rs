//! Post entity - a blog post stored under its slug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{FileId, UserId};
use crate::value_objects::{PostStatus, Slug};

/// A published (or hidden) blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique slug, also the document id
    pub slug: Slug,
    pub title: String,
    /// Rich text (HTML) body
    pub content: String,
    pub featured_image: Option<FileId>,
    pub status: PostStatus,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    /// The editable part of the post, e.g. to prefill an edit form.
    pub fn fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            content: self.content.clone(),
            featured_image: self.featured_image.clone(),
            status: self.status,
        }
    }
}

/// Editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub featured_image: Option<FileId>,
    pub status: PostStatus,
}

impl PostFields {
    /// Create post fields with an active status and no image.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title is blank.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("Post title cannot be empty"));
        }
        Ok(Self {
            title,
            content: content.into(),
            featured_image: None,
            status: PostStatus::Active,
        })
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_featured_image(mut self, file_id: Option<FileId>) -> Self {
        self.featured_image = file_id;
        self
    }
}

/// Everything needed to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub slug: Slug,
    pub fields: PostFields,
    pub author_id: UserId,
}
