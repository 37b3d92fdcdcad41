//! Toggle like use case.

use std::sync::Arc;

use quillpost_domain::{Like, Slug};

use crate::entities::Likes;
use crate::stores::AuthStore;
use crate::use_cases::error::PostActionError;

/// Likes of a post after a toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeSummary {
    pub likes: Vec<Like>,
    pub viewer_liked: bool,
}

impl LikeSummary {
    pub fn count(&self) -> usize {
        self.likes.len()
    }
}

pub struct ToggleLike {
    likes: Arc<Likes>,
    auth: Arc<AuthStore>,
}

impl ToggleLike {
    pub fn new(likes: Arc<Likes>, auth: Arc<AuthStore>) -> Self {
        Self { likes, auth }
    }

    /// Like the post, or unlike it when the viewer already does.
    pub async fn execute(&self, post_id: &Slug) -> Result<LikeSummary, PostActionError> {
        let user_id = self.auth.user_id().ok_or(PostActionError::NotSignedIn)?;

        let current = self.likes.get_likes(post_id).await?;
        if current.iter().any(|like| like.user_id == user_id) {
            self.likes.remove_like(post_id, &user_id).await?;
        } else {
            self.likes.add_like(post_id, &user_id).await?;
        }

        let likes = self.likes.get_likes(post_id).await?;
        let viewer_liked = likes.iter().any(|like| like.user_id == user_id);
        Ok(LikeSummary {
            likes,
            viewer_liked,
        })
    }
}
