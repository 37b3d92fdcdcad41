//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod appwrite;
pub mod config;
pub mod ports;
pub mod random;
