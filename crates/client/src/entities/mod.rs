//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps the platform operations for one kind of record.
//! `Identity` is the identity adapter; the rest form the content adapter.

mod decode;

pub mod comments;
pub mod files;
pub mod identity;
pub mod likes;
pub mod posts;
pub mod profiles;

pub use comments::Comments;
pub use files::Files;
pub use identity::Identity;
pub use likes::Likes;
pub use posts::Posts;
pub use profiles::Profiles;
