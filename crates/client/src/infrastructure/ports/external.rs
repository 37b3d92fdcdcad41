//! External service port traits (identity, documents, files).

use async_trait::async_trait;
use quillpost_domain::{FileId, FileUpload, OAuthProvider, Session, StoredFile, UserAccount, UserId};
use quillpost_shared::{Document, DocumentList, Permission, Query};
use serde_json::Value;
use url::Url;

use super::error::PlatformError;

// =============================================================================
// Collections and file views
// =============================================================================

/// The document collections the blog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Posts,
    Likes,
    Comments,
    Profiles,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Posts => "posts",
            Collection::Likes => "likes",
            Collection::Comments => "comments",
            Collection::Profiles => "profiles",
        }
    }
}

/// What the storage service hands back for "show me this file".
///
/// Depending on the backend this is a parsed URL or an already rendered
/// string; callers only ever want the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileView {
    Url(Url),
    Text(String),
}

impl FileView {
    /// Normalize either shape to a dereferenceable string.
    pub fn into_href(self) -> String {
        match self {
            FileView::Url(url) => url.into(),
            FileView::Text(text) => text,
        }
    }
}

impl From<Url> for FileView {
    fn from(url: Url) -> Self {
        FileView::Url(url)
    }
}

impl From<String> for FileView {
    fn from(text: String) -> Self {
        FileView::Text(text)
    }
}

// =============================================================================
// Identity
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountPort: Send + Sync {
    async fn create_account(
        &self,
        user_id: &UserId,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserAccount, PlatformError>;

    async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, PlatformError>;

    /// Authorization URL of the provider login; the caller navigates to it.
    fn oauth2_session_url(
        &self,
        provider: &OAuthProvider,
        success: &Url,
        failure: &Url,
    ) -> Result<Url, PlatformError>;

    /// Fails with `PlatformError::Unauthorized` when there is no session.
    async fn get_account(&self) -> Result<UserAccount, PlatformError>;

    async fn delete_sessions(&self) -> Result<(), PlatformError>;
}

// =============================================================================
// Documents
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentPort: Send + Sync {
    async fn create_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
        permissions: Vec<Permission>,
    ) -> Result<Document, PlatformError>;

    async fn get_document(
        &self,
        collection: Collection,
        document_id: &str,
    ) -> Result<Document, PlatformError>;

    /// Partial update: only the attributes present in `data` change.
    async fn update_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Document, PlatformError>;

    async fn delete_document(
        &self,
        collection: Collection,
        document_id: &str,
    ) -> Result<(), PlatformError>;

    async fn list_documents(
        &self,
        collection: Collection,
        queries: Vec<Query>,
    ) -> Result<DocumentList, PlatformError>;
}

// =============================================================================
// Files
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilePort: Send + Sync {
    async fn create_file(
        &self,
        file_id: &FileId,
        upload: FileUpload,
        permissions: Vec<Permission>,
    ) -> Result<StoredFile, PlatformError>;

    async fn delete_file(&self, file_id: &FileId) -> Result<(), PlatformError>;

    /// Pure: builds the view descriptor without contacting the platform.
    fn file_view(&self, file_id: &str) -> FileView;
}
