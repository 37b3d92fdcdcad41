//! Quillpost client library.
//!
//! Typed adapters over the backend platform plus the flows a blog view
//! layer needs.
//!
//! ## Structure
//!
//! - `entities/` - Identity adapter and the content entity modules
//! - `use_cases/` - User story orchestration across entities
//! - `stores/` - Client-side state (the signed-in user)
//! - `infrastructure/` - Ports, configuration and the platform HTTP adapters
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
