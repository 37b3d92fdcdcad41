//! Engagement use cases - likes and comments on posts.

use std::sync::Arc;

mod comments;
mod toggle_like;

pub use comments::{PostComment, RemoveComment};
pub use toggle_like::{LikeSummary, ToggleLike};

/// Container for engagement use cases.
pub struct EngagementUseCases {
    pub toggle_like: Arc<ToggleLike>,
    pub post_comment: Arc<PostComment>,
    pub remove_comment: Arc<RemoveComment>,
}

impl EngagementUseCases {
    pub fn new(
        toggle_like: Arc<ToggleLike>,
        post_comment: Arc<PostComment>,
        remove_comment: Arc<RemoveComment>,
    ) -> Self {
        Self {
            toggle_like,
            post_comment,
            remove_comment,
        }
    }
}
