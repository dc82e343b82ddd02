//! Slug - URL-safe identifier unique within a kind
//!
//! Explicit slugs are normalized (trimmed, lower-cased); absent slugs are
//! derived from the item title.

use std::fmt;

use serde::Serialize;

/// Normalized slug value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalize a caller-supplied slug: trim and lower-case.
    pub fn normalize(raw: &str) -> Result<Self, SlugError> {
        let cleaned = raw.trim().to_lowercase();
        if cleaned.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(cleaned))
    }

    /// Derive a slug from a title. Returns `None` when the title has no
    /// sluggable characters (for example, all punctuation).
    pub fn derive(title: &str) -> Option<Self> {
        let derived = slug::slugify(title);
        if derived.is_empty() {
            None
        } else {
            Some(Self(derived))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when normalizing a slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
