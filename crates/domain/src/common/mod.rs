//! Common utility functions shared by the domain and the client.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{empty_if_none, some_if_not_empty, StringExt};
