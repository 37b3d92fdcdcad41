//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the blog.
//! Use cases orchestrate across entity modules and the auth store.

pub mod engagement;
pub mod error;
pub mod posts;
pub mod profile;
pub mod session;

pub use engagement::{EngagementUseCases, LikeSummary, PostComment, RemoveComment, ToggleLike};
pub use error::PostActionError;
pub use posts::{
    FeedItem, LoadFeed, LoadPost, PostDraft, PostPage, PostUseCases, PublishPost, RemovePost,
};
pub use profile::SaveProfile;
pub use session::{SessionError, SessionUseCases};
