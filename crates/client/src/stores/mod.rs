//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong on the platform:
//! - `AuthStore` - the signed-in user, if any

pub mod auth;

pub use auth::{AuthState, AuthStore};
