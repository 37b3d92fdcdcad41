//! Domain entities of the blog.
//!
//! Entities are plain data with small invariants; persistence lives behind
//! the client crate's ports.

mod account;
mod comment;
mod file;
mod like;
mod post;
mod profile;

pub use account::{Session, UserAccount};
pub use comment::{Comment, NewComment};
pub use file::{FileUpload, StoredFile};
pub use like::Like;
pub use post::{NewPost, Post, PostFields};
pub use profile::{Profile, ProfileData};
