//! Third-party login providers.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A provider accepted by the platform's OAuth2 session endpoint.
///
/// The common providers get their own variant; anything else the platform
/// is configured for can be named with `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    Github,
    Facebook,
    Apple,
    Microsoft,
    Discord,
    Other(String),
}

impl OAuthProvider {
    /// Provider name as used in the session URL path.
    pub fn as_str(&self) -> &str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Apple => "apple",
            OAuthProvider::Microsoft => "microsoft",
            OAuthProvider::Discord => "discord",
            OAuthProvider::Other(name) => name,
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::parse(format!("Invalid OAuth provider: {:?}", s)));
        }
        Ok(match name.as_str() {
            "google" => OAuthProvider::Google,
            "github" => OAuthProvider::Github,
            "facebook" => OAuthProvider::Facebook,
            "apple" => OAuthProvider::Apple,
            "microsoft" => OAuthProvider::Microsoft,
            "discord" => OAuthProvider::Discord,
            _ => OAuthProvider::Other(name),
        })
    }
}
