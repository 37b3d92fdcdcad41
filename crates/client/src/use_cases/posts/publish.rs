//! Publish post use case - create or edit a post with its featured image.

use std::sync::Arc;

use quillpost_domain::{FileUpload, NewPost, Post, PostFields, PostStatus, Slug};

use crate::entities::{Files, Posts};
use crate::stores::AuthStore;
use crate::use_cases::error::PostActionError;

/// What the author filled in on the post form.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    /// A newly chosen featured image
    pub image: Option<FileUpload>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: PostStatus::default(),
            image: None,
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_image(mut self, image: FileUpload) -> Self {
        self.image = Some(image);
        self
    }
}

/// Creates a new post or edits an existing one.
///
/// A new image is uploaded first and replaces (and deletes) the previous
/// one. The steps are not atomic: a failed write leaves earlier steps done.
pub struct PublishPost {
    posts: Arc<Posts>,
    files: Arc<Files>,
    auth: Arc<AuthStore>,
}

impl PublishPost {
    pub fn new(posts: Arc<Posts>, files: Arc<Files>, auth: Arc<AuthStore>) -> Self {
        Self { posts, files, auth }
    }

    /// Publish `draft`, as an edit of `existing` when given.
    pub async fn execute(
        &self,
        existing: Option<&Post>,
        draft: PostDraft,
    ) -> Result<Post, PostActionError> {
        let author_id = self.auth.user_id().ok_or(PostActionError::NotSignedIn)?;
        if let Some(post) = existing {
            if !post.is_authored_by(&author_id) {
                return Err(PostActionError::NotPermitted(format!(
                    "only the author can edit {}",
                    post.slug
                )));
            }
        }

        let fields = PostFields::new(draft.title, draft.content)?.with_status(draft.status);
        let slug = match existing {
            Some(post) => post.slug.clone(),
            None => Slug::from_title(&fields.title)?,
        };

        let uploaded = match draft.image {
            Some(image) => Some(self.files.upload_file(image).await?.id),
            None => None,
        };

        match existing {
            Some(post) => {
                let featured_image = match uploaded {
                    Some(new_image) => {
                        if let Some(old_image) = &post.featured_image {
                            self.files.delete_file(old_image).await?;
                        }
                        Some(new_image)
                    }
                    None => post.featured_image.clone(),
                };
                let fields = fields.with_featured_image(featured_image);
                Ok(self.posts.update_post(&slug, &fields).await?)
            }
            None => {
                let new_post = NewPost {
                    slug,
                    fields: fields.with_featured_image(uploaded),
                    author_id,
                };
                Ok(self.posts.create_post(&new_post).await?)
            }
        }
    }
}
