//! Comment entity operations.

use std::sync::Arc;

use quillpost_domain::{Comment, CommentId, NewComment, Slug, UserId};
use quillpost_shared::{CommentAttributes, Document, Query, CREATED_AT};

use super::decode::{attributes, valid};
use crate::infrastructure::ports::{Collection, DocumentPort, PlatformError, RandomPort};

pub struct Comments {
    documents: Arc<dyn DocumentPort>,
    random: Arc<dyn RandomPort>,
}

impl Comments {
    pub fn new(documents: Arc<dyn DocumentPort>, random: Arc<dyn RandomPort>) -> Self {
        Self { documents, random }
    }

    pub async fn add_comment(&self, comment: &NewComment) -> Result<Comment, PlatformError> {
        let comment_id = CommentId::from_uuid(self.random.gen_uuid());
        let data = serde_json::to_value(CommentAttributes {
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.to_string(),
            username: comment.username.clone(),
            content: comment.content.clone(),
        })
        .map_err(|e| PlatformError::invalid_response("add_comment", e))?;

        let document = self
            .documents
            .create_document(Collection::Comments, comment_id.as_str(), data, Vec::new())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "add_comment",
                    post_id = %comment.post_id,
                    user_id = %comment.user_id,
                    "Failed to add comment"
                )
            })?;
        to_comment("add_comment", &document)
    }

    /// Comments of a post, oldest first.
    pub async fn get_comments(&self, post_id: &Slug) -> Result<Vec<Comment>, PlatformError> {
        let queries = vec![
            Query::equal("postId", post_id.as_str()),
            Query::order_asc(CREATED_AT),
        ];
        let list = self
            .documents
            .list_documents(Collection::Comments, queries)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "get_comments",
                    post_id = %post_id,
                    "Failed to list comments"
                )
            })?;
        list.documents
            .iter()
            .map(|document| to_comment("get_comments", document))
            .collect()
    }

    pub async fn delete_comment(&self, comment_id: &CommentId) -> Result<bool, PlatformError> {
        self.documents
            .delete_document(Collection::Comments, comment_id.as_str())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "delete_comment",
                    comment_id = %comment_id,
                    "Failed to delete comment"
                )
            })?;
        Ok(true)
    }
}

fn to_comment(operation: &'static str, document: &Document) -> Result<Comment, PlatformError> {
    let attrs: CommentAttributes = attributes(operation, document)?;
    Ok(Comment {
        id: valid(operation, document, CommentId::new(document.id.clone()))?,
        post_id: valid(operation, document, Slug::new(attrs.post_id))?,
        user_id: valid(operation, document, UserId::new(attrs.user_id))?,
        username: attrs.username,
        content: attrs.content,
        created_at: document.created_at,
    })
}
