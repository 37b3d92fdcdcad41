//! Save profile use case.

use std::sync::Arc;

use quillpost_domain::{FileUpload, Profile, ProfileData};

use crate::entities::{Files, Profiles};
use crate::stores::AuthStore;
use crate::use_cases::error::PostActionError;

/// Upserts the signed-in user's profile, replacing the avatar when a new
/// one is supplied.
pub struct SaveProfile {
    profiles: Arc<Profiles>,
    files: Arc<Files>,
    auth: Arc<AuthStore>,
}

impl SaveProfile {
    pub fn new(profiles: Arc<Profiles>, files: Arc<Files>, auth: Arc<AuthStore>) -> Self {
        Self {
            profiles,
            files,
            auth,
        }
    }

    pub async fn execute(
        &self,
        mut data: ProfileData,
        avatar: Option<FileUpload>,
    ) -> Result<Profile, PostActionError> {
        let user_id = self.auth.user_id().ok_or(PostActionError::NotSignedIn)?;

        if let Some(upload) = avatar {
            let previous = self
                .profiles
                .get_profile(&user_id)
                .await?
                .and_then(|profile| profile.avatar);
            let stored = self.files.upload_file(upload).await?;
            if let Some(old_avatar) = previous.filter(|old| *old != stored.id) {
                self.files.delete_file(&old_avatar).await?;
            }
            data = data.with_avatar(stored.id);
        }

        Ok(self.profiles.update_profile(&user_id, &data).await?)
    }
}
