//! Post slug - the URL-friendly key a post is stored under.
//!
//! A slug doubles as the post's document id, so it has to satisfy the
//! platform identifier rules as well as look good in a URL.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ids::{validate_platform_id, MAX_ID_LENGTH};

/// A validated post slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Create a slug from an already slugified value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the value is not a valid document id.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        validate_platform_id(&value)?;
        Ok(Self(value))
    }

    /// Derive a slug from a post title.
    ///
    /// Lowercases, keeps `a-z`, `0-9`, whitespace and `-`, and collapses each
    /// whitespace run into a single `-`. The result is cut to the id length
    /// limit and stripped of leading separators.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if nothing usable remains.
    pub fn from_title(title: &str) -> Result<Self, DomainError> {
        let slug = slugify(title);
        let slug = slug.trim_start_matches('-');
        let slug: String = slug.chars().take(MAX_ID_LENGTH).collect();
        if slug.is_empty() {
            return Err(DomainError::validation(format!(
                "Cannot derive a slug from title: {:?}",
                title
            )));
        }
        Self::new(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Title to slug transform, without any length or id rules applied.
pub fn slugify(value: &str) -> String {
    let kept = value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect::<String>();

    let mut out = String::with_capacity(kept.len());
    let mut in_whitespace = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            out.push(c);
        }
    }
    out
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> String {
        slug.0
    }
}
