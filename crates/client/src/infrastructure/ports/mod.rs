//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the client. Everything else is
//! concrete types. Ports exist for:
//! - Identity (accounts and sessions on the platform)
//! - Documents (the four blog collections)
//! - Files (the image bucket)
//! - Random ids (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{AccountPort, Collection, DocumentPort, FilePort, FileView};

#[cfg(test)]
pub use external::{MockAccountPort, MockDocumentPort, MockFilePort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::RandomPort;

#[cfg(test)]
pub use testing::MockRandomPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::PlatformError;
