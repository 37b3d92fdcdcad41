//! Post entity operations.

use std::sync::Arc;

use serde_json::Value;

use quillpost_domain::common::{empty_if_none, some_if_not_empty};
use quillpost_domain::{FileId, NewPost, Post, PostFields, PostStatus, Slug, UserId};
use quillpost_shared::{Document, PostAttributes, Query};

use super::decode::{attributes, valid};
use crate::infrastructure::ports::{Collection, DocumentPort, PlatformError};

/// Posts collection, keyed by slug.
pub struct Posts {
    documents: Arc<dyn DocumentPort>,
}

impl Posts {
    pub fn new(documents: Arc<dyn DocumentPort>) -> Self {
        Self { documents }
    }

    /// Store a new post under its slug. A taken slug is a conflict.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, PlatformError> {
        let data = post_data(&post.fields, &post.author_id)?;
        let document = self
            .documents
            .create_document(Collection::Posts, post.slug.as_str(), data, Vec::new())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "create_post",
                    slug = %post.slug,
                    "Failed to create post"
                )
            })?;
        to_post("create_post", &document)
    }

    /// Replace the editable fields of a post.
    pub async fn update_post(
        &self,
        slug: &Slug,
        fields: &PostFields,
    ) -> Result<Post, PlatformError> {
        let data = serde_json::json!({
            "title": fields.title,
            "content": fields.content,
            "featuredImage": empty_if_none(fields.featured_image.as_ref()),
            "status": fields.status.as_str(),
        });
        let document = self
            .documents
            .update_document(Collection::Posts, slug.as_str(), data)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "update_post",
                    slug = %slug,
                    "Failed to update post"
                )
            })?;
        to_post("update_post", &document)
    }

    pub async fn delete_post(&self, slug: &Slug) -> Result<bool, PlatformError> {
        self.documents
            .delete_document(Collection::Posts, slug.as_str())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "delete_post",
                    slug = %slug,
                    "Failed to delete post"
                )
            })?;
        Ok(true)
    }

    /// A missing post is `PlatformError::NotFound`.
    pub async fn get_post(&self, slug: &Slug) -> Result<Post, PlatformError> {
        let document = self
            .documents
            .get_document(Collection::Posts, slug.as_str())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "get_post",
                    slug = %slug,
                    "Failed to get post"
                )
            })?;
        to_post("get_post", &document)
    }

    /// Active posts.
    pub async fn get_posts(&self) -> Result<Vec<Post>, PlatformError> {
        self.get_posts_matching(vec![Query::equal("status", PostStatus::Active.as_str())])
            .await
    }

    /// Posts matching `queries`; an empty list matches every post.
    pub async fn get_posts_matching(
        &self,
        queries: Vec<Query>,
    ) -> Result<Vec<Post>, PlatformError> {
        let list = self
            .documents
            .list_documents(Collection::Posts, queries)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, operation = "get_posts", "Failed to list posts")
            })?;
        list.documents
            .iter()
            .map(|document| to_post("get_posts", document))
            .collect()
    }
}

fn post_data(fields: &PostFields, author_id: &UserId) -> Result<Value, PlatformError> {
    let attributes = PostAttributes {
        title: fields.title.clone(),
        content: fields.content.clone(),
        featured_image: empty_if_none(fields.featured_image.as_ref()),
        status: fields.status.as_str().to_string(),
        user_id: author_id.to_string(),
    };
    serde_json::to_value(attributes).map_err(|e| PlatformError::invalid_response("post_data", e))
}

fn to_post(operation: &'static str, document: &Document) -> Result<Post, PlatformError> {
    let attrs: PostAttributes = attributes(operation, document)?;
    Ok(Post {
        slug: valid(operation, document, Slug::new(document.id.clone()))?,
        title: attrs.title,
        content: attrs.content,
        featured_image: valid(
            operation,
            document,
            some_if_not_empty(attrs.featured_image).map(FileId::new).transpose(),
        )?,
        status: valid(operation, document, attrs.status.parse())?,
        author_id: valid(operation, document, UserId::new(attrs.user_id))?,
        created_at: document.created_at,
        updated_at: document.updated_at,
    })
}
