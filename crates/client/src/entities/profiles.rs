//! Profile entity operations.

use std::sync::Arc;

use serde_json::Value;

use quillpost_domain::common::{empty_if_none, some_if_not_empty, StringExt};
use quillpost_domain::{FileId, Profile, ProfileData, ProfileId, UserId};
use quillpost_shared::{Document, ProfileAttributes, ProfilePatch, Query};

use super::decode::{attributes, valid};
use crate::infrastructure::ports::{Collection, DocumentPort, PlatformError};

/// Profiles collection: at most one profile per user.
pub struct Profiles {
    documents: Arc<dyn DocumentPort>,
}

impl Profiles {
    pub fn new(documents: Arc<dyn DocumentPort>) -> Self {
        Self { documents }
    }

    pub async fn get_profile(&self, user_id: &UserId) -> Result<Option<Profile>, PlatformError> {
        let list = self
            .documents
            .list_documents(
                Collection::Profiles,
                vec![Query::equal("userId", user_id.as_str())],
            )
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "get_profile",
                    user_id = %user_id,
                    "Failed to look up profile"
                )
            })?;
        list.documents
            .first()
            .map(|document| to_profile("get_profile", document))
            .transpose()
    }

    /// Create the user's profile; unset optional fields are stored empty.
    pub async fn create_profile(
        &self,
        user_id: &UserId,
        data: &ProfileData,
    ) -> Result<Profile, PlatformError> {
        let profile_id = ProfileId::for_user(user_id);
        let attributes = ProfileAttributes {
            user_id: user_id.to_string(),
            username: data.username.clone(),
            email: data.email.clone(),
            phone: data.phone.clone().unwrap_or_default(),
            bio: data.bio.clone().unwrap_or_default(),
            avatar: empty_if_none(data.avatar.as_ref()),
        };
        let body = serde_json::to_value(attributes)
            .map_err(|e| PlatformError::invalid_response("create_profile", e))?;

        let document = self
            .documents
            .create_document(Collection::Profiles, profile_id.as_str(), body, Vec::new())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "create_profile",
                    user_id = %user_id,
                    "Failed to create profile"
                )
            })?;
        to_profile("create_profile", &document)
    }

    /// Update the user's profile, creating it when missing.
    ///
    /// Only the fields present in `data` are sent on update.
    pub async fn update_profile(
        &self,
        user_id: &UserId,
        data: &ProfileData,
    ) -> Result<Profile, PlatformError> {
        if let Some(existing) = self.get_profile(user_id).await? {
            return self.patch(existing.id.as_str(), user_id, data).await;
        }

        match self.create_profile(user_id, data).await {
            Err(e) if e.is_conflict() => {
                tracing::debug!(user_id = %user_id, "Profile created concurrently, updating");
                let profile_id = ProfileId::for_user(user_id);
                self.patch(profile_id.as_str(), user_id, data).await
            }
            result => result,
        }
    }

    async fn patch(
        &self,
        document_id: &str,
        user_id: &UserId,
        data: &ProfileData,
    ) -> Result<Profile, PlatformError> {
        let document = self
            .documents
            .update_document(Collection::Profiles, document_id, patch_body(data)?)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "update_profile",
                    user_id = %user_id,
                    "Failed to update profile"
                )
            })?;
        to_profile("update_profile", &document)
    }
}

fn patch_body(data: &ProfileData) -> Result<Value, PlatformError> {
    let patch = ProfilePatch {
        username: data.username.clone().into_option(),
        email: data.email.clone().into_option(),
        phone: data.phone.clone(),
        bio: data.bio.clone(),
        avatar: data.avatar.as_ref().map(ToString::to_string),
    };
    serde_json::to_value(patch).map_err(|e| PlatformError::invalid_response("update_profile", e))
}

fn to_profile(operation: &'static str, document: &Document) -> Result<Profile, PlatformError> {
    let attrs: ProfileAttributes = attributes(operation, document)?;
    Ok(Profile {
        id: valid(operation, document, ProfileId::new(document.id.clone()))?,
        user_id: valid(operation, document, UserId::new(attrs.user_id))?,
        username: attrs.username,
        email: attrs.email,
        phone: attrs.phone,
        bio: attrs.bio,
        avatar: valid(
            operation,
            document,
            some_if_not_empty(attrs.avatar).map(FileId::new).transpose(),
        )?,
        created_at: document.created_at,
        updated_at: document.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockDocumentPort;
    use mockall::Sequence;
    use quillpost_shared::{error_types, DocumentList};
    use serde_json::json;

    fn profile_document(id: &str, user_id: &str, bio: &str) -> Document {
        serde_json::from_value(json!({
            "$id": id,
            "$createdAt": "2024-03-01T09:00:00.000+00:00",
            "$updatedAt": "2024-03-01T09:00:00.000+00:00",
            "userId": user_id,
            "username": "ada",
            "email": "ada@example.com",
            "phone": "",
            "bio": bio,
            "avatar": ""
        }))
        .unwrap()
    }

    fn empty_list() -> DocumentList {
        DocumentList {
            total: 0,
            documents: Vec::new(),
        }
    }

    fn user() -> UserId {
        UserId::new("user1").unwrap()
    }

    #[tokio::test]
    async fn get_profile_is_none_without_match() {
        let mut documents = MockDocumentPort::new();
        documents
            .expect_list_documents()
            .returning(|_, _| Ok(empty_list()));

        let profile = Profiles::new(Arc::new(documents))
            .get_profile(&user())
            .await
            .unwrap();
        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn get_profile_reads_null_optionals_as_unset() {
        let mut document = profile_document("user1", "user1", "");
        for key in ["phone", "bio", "avatar"] {
            document.data.insert(key.to_string(), Value::Null);
        }
        let mut documents = MockDocumentPort::new();
        documents.expect_list_documents().returning(move |_, _| {
            Ok(DocumentList {
                total: 1,
                documents: vec![document.clone()],
            })
        });

        let profile = Profiles::new(Arc::new(documents))
            .get_profile(&user())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.phone, "");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.avatar, None);
    }

    #[tokio::test]
    async fn create_defaults_optional_fields_to_empty() {
        let mut documents = MockDocumentPort::new();
        documents
            .expect_create_document()
            .withf(|collection, id, data, _| {
                *collection == Collection::Profiles
                    && id == "user1"
                    && data["phone"] == ""
                    && data["bio"] == ""
                    && data["avatar"] == ""
            })
            .returning(|_, id, _, _| Ok(profile_document(id, "user1", "")));

        let profile = Profiles::new(Arc::new(documents))
            .create_profile(&user(), &ProfileData::new("ada", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(profile.avatar, None);
    }

    #[tokio::test]
    async fn update_creates_missing_profile_keyed_by_user() {
        let mut documents = MockDocumentPort::new();
        documents
            .expect_list_documents()
            .returning(|_, _| Ok(empty_list()));
        documents
            .expect_create_document()
            .withf(|_, id, _, _| id == "user1")
            .times(1)
            .returning(|_, id, _, _| Ok(profile_document(id, "user1", "hi")));
        documents.expect_update_document().never();

        let profile = Profiles::new(Arc::new(documents))
            .update_profile(
                &user(),
                &ProfileData::new("ada", "ada@example.com").with_bio("hi"),
            )
            .await
            .unwrap();
        assert_eq!(profile.id.as_str(), "user1");
    }

    #[tokio::test]
    async fn update_patches_existing_profile_with_supplied_fields() {
        let mut documents = MockDocumentPort::new();
        documents.expect_list_documents().returning(|_, _| {
            Ok(DocumentList {
                total: 1,
                documents: vec![profile_document("legacy42", "user1", "")],
            })
        });
        documents
            .expect_update_document()
            .withf(|_, id, data| {
                id == "legacy42"
                    && data["bio"] == "new bio"
                    && data.get("phone").is_none()
                    && data.get("avatar").is_none()
            })
            .times(1)
            .returning(|_, id, _| Ok(profile_document(id, "user1", "new bio")));
        documents.expect_create_document().never();

        let profile = Profiles::new(Arc::new(documents))
            .update_profile(
                &user(),
                &ProfileData::new("ada", "ada@example.com").with_bio("new bio"),
            )
            .await
            .unwrap();
        assert_eq!(profile.bio, "new bio");
    }

    #[tokio::test]
    async fn conflicting_create_falls_back_to_update() {
        let mut seq = Sequence::new();
        let mut documents = MockDocumentPort::new();
        documents
            .expect_list_documents()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(empty_list()));
        documents
            .expect_create_document()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| {
                Err(PlatformError::Conflict {
                    kind: error_types::DOCUMENT_ALREADY_EXISTS.to_string(),
                    message: "exists".to_string(),
                })
            });
        documents
            .expect_update_document()
            .withf(|_, id, _| id == "user1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, id, _| Ok(profile_document(id, "user1", "")));

        let profile = Profiles::new(Arc::new(documents))
            .update_profile(&user(), &ProfileData::new("ada", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(profile.id.as_str(), "user1");
    }
}
