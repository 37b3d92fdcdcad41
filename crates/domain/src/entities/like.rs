//! Like entity - one per (post, user) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{LikeId, UserId};
use crate::value_objects::Slug;

/// Namespace for deriving like ids from the (post, user) pair.
const LIKE_NAMESPACE: Uuid = Uuid::from_u128(0x6c1b_4d0e_93a2_4f57_8c1e_2b7a_90d4_e613);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub post_id: Slug,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Deterministic document id for a user's like of a post.
    ///
    /// Storing likes under this id lets the platform reject a second like
    /// of the same post by the same user.
    pub fn key(post_id: &Slug, user_id: &UserId) -> LikeId {
        let name = format!("{}:{}", post_id, user_id);
        LikeId::from_uuid(Uuid::new_v5(&LIKE_NAMESPACE, name.as_bytes()))
    }
}
