//! Post use cases.

use std::sync::Arc;

mod load;
mod publish;
mod remove;

pub use load::{FeedItem, LoadFeed, LoadPost, PostPage};
pub use publish::{PostDraft, PublishPost};
pub use remove::RemovePost;

/// Container for post use cases.
pub struct PostUseCases {
    pub publish: Arc<PublishPost>,
    pub remove: Arc<RemovePost>,
    pub load: Arc<LoadPost>,
    pub feed: Arc<LoadFeed>,
}

impl PostUseCases {
    pub fn new(
        publish: Arc<PublishPost>,
        remove: Arc<RemovePost>,
        load: Arc<LoadPost>,
        feed: Arc<LoadFeed>,
    ) -> Self {
        Self {
            publish,
            remove,
            load,
            feed,
        }
    }
}
