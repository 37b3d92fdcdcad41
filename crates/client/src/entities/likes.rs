//! Like entity operations.

use std::sync::Arc;

use quillpost_domain::{Like, LikeId, Slug, UserId};
use quillpost_shared::{Document, LikeAttributes, Query};

use super::decode::{attributes, valid};
use crate::infrastructure::ports::{Collection, DocumentPort, PlatformError};

/// Likes collection. Each (post, user) pair maps to one document id, so a
/// user can like a post at most once.
pub struct Likes {
    documents: Arc<dyn DocumentPort>,
}

impl Likes {
    pub fn new(documents: Arc<dyn DocumentPort>) -> Self {
        Self { documents }
    }

    /// Like a post. Liking an already liked post returns the existing like.
    pub async fn add_like(&self, post_id: &Slug, user_id: &UserId) -> Result<Like, PlatformError> {
        let like_id = Like::key(post_id, user_id);
        let data = serde_json::to_value(LikeAttributes {
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        })
        .map_err(|e| PlatformError::invalid_response("add_like", e))?;

        match self
            .documents
            .create_document(Collection::Likes, like_id.as_str(), data, Vec::new())
            .await
        {
            Ok(document) => to_like("add_like", &document),
            Err(e) if e.is_conflict() => {
                tracing::debug!(like_id = %like_id, "Like already exists");
                let document = self
                    .documents
                    .get_document(Collection::Likes, like_id.as_str())
                    .await
                    .inspect_err(|e| log_failure("add_like", post_id, user_id, e))?;
                to_like("add_like", &document)
            }
            Err(e) => {
                log_failure("add_like", post_id, user_id, &e);
                Err(e)
            }
        }
    }

    /// Remove the user's like of a post. `false` when there was none.
    pub async fn remove_like(
        &self,
        post_id: &Slug,
        user_id: &UserId,
    ) -> Result<bool, PlatformError> {
        let queries = vec![
            Query::equal("postId", post_id.as_str()),
            Query::equal("userId", user_id.as_str()),
        ];
        let list = self
            .documents
            .list_documents(Collection::Likes, queries)
            .await
            .inspect_err(|e| log_failure("remove_like", post_id, user_id, e))?;

        let Some(document) = list.documents.first() else {
            return Ok(false);
        };
        self.documents
            .delete_document(Collection::Likes, &document.id)
            .await
            .inspect_err(|e| log_failure("remove_like", post_id, user_id, e))?;
        Ok(true)
    }

    pub async fn get_likes(&self, post_id: &Slug) -> Result<Vec<Like>, PlatformError> {
        let list = self
            .documents
            .list_documents(
                Collection::Likes,
                vec![Query::equal("postId", post_id.as_str())],
            )
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "get_likes",
                    post_id = %post_id,
                    "Failed to list likes"
                )
            })?;
        list.documents
            .iter()
            .map(|document| to_like("get_likes", document))
            .collect()
    }
}

fn log_failure(operation: &'static str, post_id: &Slug, user_id: &UserId, error: &PlatformError) {
    tracing::error!(
        error = %error,
        operation,
        post_id = %post_id,
        user_id = %user_id,
        "Like operation failed"
    );
}

fn to_like(operation: &'static str, document: &Document) -> Result<Like, PlatformError> {
    let attrs: LikeAttributes = attributes(operation, document)?;
    Ok(Like {
        id: valid(operation, document, LikeId::new(document.id.clone()))?,
        post_id: valid(operation, document, Slug::new(attrs.post_id))?,
        user_id: valid(operation, document, UserId::new(attrs.user_id))?,
        created_at: document.created_at,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::infrastructure::ports::MockDocumentPort;
    use quillpost_shared::{error_types, DocumentList};
    use serde_json::json;

    pub(crate) fn like_document(post_id: &str, user_id: &str) -> Document {
        let id = Like::key(&Slug::new(post_id).unwrap(), &UserId::new(user_id).unwrap());
        serde_json::from_value(json!({
            "$id": id.as_str(),
            "$createdAt": "2024-03-01T09:00:00.000+00:00",
            "$updatedAt": "2024-03-01T09:00:00.000+00:00",
            "postId": post_id,
            "userId": user_id
        }))
        .unwrap()
    }

    fn ids() -> (Slug, UserId) {
        (
            Slug::new("hello-world").unwrap(),
            UserId::new("reader1").unwrap(),
        )
    }

    #[tokio::test]
    async fn add_like_uses_derived_document_id() {
        let (post, user) = ids();
        let expected_id = Like::key(&post, &user);

        let mut documents = MockDocumentPort::new();
        documents
            .expect_create_document()
            .withf(move |collection, id, data, _| {
                *collection == Collection::Likes
                    && id == expected_id.as_str()
                    && data["postId"] == "hello-world"
                    && data["userId"] == "reader1"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(like_document("hello-world", "reader1")));

        let like = Likes::new(Arc::new(documents))
            .add_like(&post, &user)
            .await
            .unwrap();
        assert_eq!(like.user_id, user);
    }

    #[tokio::test]
    async fn repeated_like_returns_existing() {
        let (post, user) = ids();
        let mut documents = MockDocumentPort::new();
        documents.expect_create_document().returning(|_, _, _, _| {
            Err(PlatformError::Conflict {
                kind: error_types::DOCUMENT_ALREADY_EXISTS.to_string(),
                message: "exists".to_string(),
            })
        });
        documents
            .expect_get_document()
            .times(1)
            .returning(|_, _| Ok(like_document("hello-world", "reader1")));

        let like = Likes::new(Arc::new(documents))
            .add_like(&post, &user)
            .await
            .unwrap();
        assert_eq!(like.id, Like::key(&post, &user));
    }

    #[tokio::test]
    async fn remove_like_without_like_is_false() {
        let (post, user) = ids();
        let mut documents = MockDocumentPort::new();
        documents
            .expect_list_documents()
            .withf(|_, queries| queries.len() == 2)
            .returning(|_, _| {
                Ok(DocumentList {
                    total: 0,
                    documents: Vec::new(),
                })
            });
        documents.expect_delete_document().never();

        let removed = Likes::new(Arc::new(documents))
            .remove_like(&post, &user)
            .await
            .unwrap();
        assert!(!removed);
    }

    #[tokio::test]
    async fn remove_like_deletes_first_match() {
        let (post, user) = ids();
        let like_id = Like::key(&post, &user);
        let mut documents = MockDocumentPort::new();
        documents.expect_list_documents().returning(|_, _| {
            Ok(DocumentList {
                total: 1,
                documents: vec![like_document("hello-world", "reader1")],
            })
        });
        documents
            .expect_delete_document()
            .withf(move |collection, id| *collection == Collection::Likes && id == like_id.as_str())
            .times(1)
            .returning(|_, _| Ok(()));

        let removed = Likes::new(Arc::new(documents))
            .remove_like(&post, &user)
            .await
            .unwrap();
        assert!(removed);
    }
}
