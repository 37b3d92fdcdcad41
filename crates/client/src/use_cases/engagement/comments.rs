//! Comment use cases - posting and removing comments.

use std::sync::Arc;

use quillpost_domain::{Comment, NewComment, Post, Slug};

use crate::entities::Comments;
use crate::stores::AuthStore;
use crate::use_cases::error::PostActionError;

pub struct PostComment {
    comments: Arc<Comments>,
    auth: Arc<AuthStore>,
}

impl PostComment {
    pub fn new(comments: Arc<Comments>, auth: Arc<AuthStore>) -> Self {
        Self { comments, auth }
    }

    /// Add a comment and return the post's updated comment list.
    ///
    /// Blank text is ignored and yields `Ok(None)`.
    pub async fn execute(
        &self,
        post_id: &Slug,
        text: &str,
    ) -> Result<Option<Vec<Comment>>, PostActionError> {
        let user = self.auth.user().ok_or(PostActionError::NotSignedIn)?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        let comment = NewComment::new(
            post_id.clone(),
            user.id.clone(),
            user.display_name(),
            text.trim(),
        )?;
        self.comments.add_comment(&comment).await?;
        Ok(Some(self.comments.get_comments(post_id).await?))
    }
}

pub struct RemoveComment {
    comments: Arc<Comments>,
    auth: Arc<AuthStore>,
}

impl RemoveComment {
    pub fn new(comments: Arc<Comments>, auth: Arc<AuthStore>) -> Self {
        Self { comments, auth }
    }

    /// Allowed for the comment's author and the post's author.
    pub async fn execute(&self, post: &Post, comment: &Comment) -> Result<bool, PostActionError> {
        let user_id = self.auth.user_id().ok_or(PostActionError::NotSignedIn)?;
        if !comment.is_written_by(&user_id) && !post.is_authored_by(&user_id) {
            return Err(PostActionError::NotPermitted(format!(
                "cannot delete comment {}",
                comment.id
            )));
        }
        Ok(self.comments.delete_comment(&comment.id).await?)
    }
}
