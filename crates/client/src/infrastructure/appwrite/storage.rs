//! Storage service adapter.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

use quillpost_domain::{FileId, FileUpload, StoredFile};
use quillpost_shared::{FileResponse, Permission};

use super::http::PlatformHttp;
use crate::infrastructure::ports::{FilePort, FileView, PlatformError};

pub struct AppwriteStorage {
    http: Arc<PlatformHttp>,
    bucket_id: String,
}

impl AppwriteStorage {
    pub fn new(http: Arc<PlatformHttp>, bucket_id: impl Into<String>) -> Self {
        Self {
            http,
            bucket_id: bucket_id.into(),
        }
    }

    fn files_url(&self, file_id: Option<&str>) -> Result<url::Url, PlatformError> {
        let mut segments = vec!["storage", "buckets", self.bucket_id.as_str(), "files"];
        segments.extend(file_id);
        self.http.url(&segments)
    }
}

#[async_trait]
impl FilePort for AppwriteStorage {
    async fn create_file(
        &self,
        file_id: &FileId,
        upload: FileUpload,
        permissions: Vec<Permission>,
    ) -> Result<StoredFile, PlatformError> {
        let FileUpload {
            file_name,
            mime_type,
            bytes,
        } = upload;
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&mime_type)
            .map_err(|e| PlatformError::transport("create_file", e))?;

        let form = permissions.iter().fold(
            Form::new().text("fileId", file_id.to_string()).part("file", part),
            |form, permission| form.text("permissions[]", permission.to_string()),
        );

        let url = self.files_url(None)?;
        let request = self.http.request(Method::POST, url).await.multipart(form);
        let file: FileResponse = self.http.send("create_file", request).await?;

        Ok(StoredFile {
            id: FileId::new(file.id)
                .map_err(|e| PlatformError::invalid_payload("create_file", e))?,
            name: file.name,
            mime_type: file.mime_type,
            size: file.size_original,
            created_at: file.created_at,
        })
    }

    async fn delete_file(&self, file_id: &FileId) -> Result<(), PlatformError> {
        let url = self.files_url(Some(file_id.as_str()))?;
        let request = self.http.request(Method::DELETE, url).await;
        self.http.send_empty("delete_file", request).await
    }

    fn file_view(&self, file_id: &str) -> FileView {
        let mut segments = vec!["storage", "buckets", self.bucket_id.as_str(), "files"];
        segments.extend([file_id, "view"]);
        match self.http.url(&segments) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("project", self.http.project_id());
                FileView::Url(url)
            }
            Err(_) => FileView::Text(format!(
                "{}/storage/buckets/{}/files/{}/view?project={}",
                self.http.endpoint().as_str().trim_end_matches('/'),
                self.bucket_id,
                file_id,
                self.http.project_id()
            )),
        }
    }
}
