//! Quillpost Shared - wire types of the platform REST API.
//!
//! This crate contains the request and response bodies exchanged with the
//! backend platform (an Appwrite-compatible service):
//! - Documents and document lists
//! - Query and permission encodings
//! - Account, session and file payloads
//! - Error bodies and well-known error types
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, serde_json and chrono
//! 2. **No business logic** - pure data types and serialization
//! 3. **No domain IDs** - plain `String` ids; validation happens when
//!    mapping into domain types

pub mod account;
pub mod collections;
pub mod document;
pub mod error;
pub mod file;
pub mod headers;
pub mod permission;
pub mod query;

pub use account::{
    AccountResponse, CreateAccountRequest, CreateEmailSessionRequest, SessionResponse,
};
pub use collections::{
    CommentAttributes, LikeAttributes, PostAttributes, ProfileAttributes, ProfilePatch,
};
pub use document::{CreateDocumentRequest, Document, DocumentList, UpdateDocumentRequest};
pub use error::{error_types, ErrorBody};
pub use file::FileResponse;
pub use permission::{Permission, Role};
pub use query::{Query, QueryMethod, CREATED_AT};
