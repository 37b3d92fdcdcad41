//! File entity operations (the image bucket).

use std::sync::Arc;

use quillpost_domain::{FileId, FileUpload, StoredFile};
use quillpost_shared::{Permission, Role};

use crate::infrastructure::ports::{FilePort, PlatformError, RandomPort};

pub struct Files {
    storage: Arc<dyn FilePort>,
    random: Arc<dyn RandomPort>,
}

impl Files {
    pub fn new(storage: Arc<dyn FilePort>, random: Arc<dyn RandomPort>) -> Self {
        Self { storage, random }
    }

    /// Store a publicly readable file under a fresh id.
    pub async fn upload_file(&self, upload: FileUpload) -> Result<StoredFile, PlatformError> {
        let file_id = FileId::from_uuid(self.random.gen_uuid());
        let file_name = upload.file_name.clone();
        self.storage
            .create_file(&file_id, upload, vec![Permission::read(Role::Any)])
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "upload_file",
                    file_id = %file_id,
                    file_name = %file_name,
                    "Failed to upload file"
                )
            })
    }

    pub async fn delete_file(&self, file_id: &FileId) -> Result<bool, PlatformError> {
        self.storage.delete_file(file_id).await.inspect_err(|e| {
            tracing::error!(
                error = %e,
                operation = "delete_file",
                file_id = %file_id,
                "Failed to delete file"
            )
        })?;
        Ok(true)
    }

    /// Displayable URL of a file; `""` when there is no file.
    pub fn get_file_preview<S: AsRef<str>>(&self, file_id: Option<S>) -> String {
        match file_id {
            Some(id) if !id.as_ref().is_empty() => self.storage.file_view(id.as_ref()).into_href(),
            _ => String::new(),
        }
    }
}
