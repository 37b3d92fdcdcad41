//! Account and session entities - the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{SessionId, UserId};

/// The signed-in user as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// When the account was registered
    pub registration: DateTime<Utc>,
    pub email_verified: bool,
}

impl UserAccount {
    /// Name to show next to content, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A platform session created by a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    /// Login method, e.g. `email` or an OAuth provider name
    pub provider: String,
    pub expires_at: DateTime<Utc>,
    /// Whether this is the session the request was made with
    pub current: bool,
}
