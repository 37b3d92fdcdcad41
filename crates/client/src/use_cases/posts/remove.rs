//! Remove post use case.

use std::sync::Arc;

use quillpost_domain::Slug;

use crate::entities::{Files, Posts};
use crate::stores::AuthStore;
use crate::use_cases::error::PostActionError;

/// Deletes a post and then its featured image. Likes and comments stay.
pub struct RemovePost {
    posts: Arc<Posts>,
    files: Arc<Files>,
    auth: Arc<AuthStore>,
}

impl RemovePost {
    pub fn new(posts: Arc<Posts>, files: Arc<Files>, auth: Arc<AuthStore>) -> Self {
        Self { posts, files, auth }
    }

    /// `true` when the post was deleted.
    pub async fn execute(&self, slug: &Slug) -> Result<bool, PostActionError> {
        let user_id = self.auth.user_id().ok_or(PostActionError::NotSignedIn)?;
        let post = self.posts.get_post(slug).await?;
        if !post.is_authored_by(&user_id) {
            return Err(PostActionError::NotPermitted(format!(
                "only the author can delete {}",
                slug
            )));
        }

        let deleted = self.posts.delete_post(slug).await?;
        if deleted {
            if let Some(image) = &post.featured_image {
                self.files.delete_file(image).await?;
            }
        }
        Ok(deleted)
    }
}
