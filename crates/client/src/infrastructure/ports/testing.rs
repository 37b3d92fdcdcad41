//! Testability port for injecting randomness.

use uuid::Uuid;

/// Source of fresh unique ids (accounts, uploaded files).
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    fn gen_uuid(&self) -> Uuid;
}
