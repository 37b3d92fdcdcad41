//! Quillpost Domain - entities, value objects and identifiers of the blog.
//!
//! Nothing in this crate talks to the network. The client crate maps the
//! platform's wire documents into these types and back.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Comment, FileUpload, Like, NewComment, NewPost, Post, PostFields, Profile, ProfileData,
    Session, StoredFile, UserAccount,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{validate_platform_id, CommentId, FileId, LikeId, ProfileId, SessionId, UserId};

// Re-export value objects
pub use value_objects::{slugify, OAuthProvider, PostStatus, Slug};
