//! Errors shared by the signed-in content flows.

use quillpost_domain::DomainError;

use crate::infrastructure::ports::PlatformError;

#[derive(Debug, thiserror::Error)]
pub enum PostActionError {
    #[error("You must be signed in")]
    NotSignedIn,

    #[error("Not permitted: {0}")]
    NotPermitted(String),

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
