//! Value objects - validated, immutable building blocks of the entities.

mod oauth_provider;
mod post_status;
mod slug;

pub use oauth_provider::OAuthProvider;
pub use post_status::PostStatus;
pub use slug::{slugify, Slug};
