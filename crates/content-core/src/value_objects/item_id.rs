//! Item ID - opaque unique identifier assigned by the store
//!
//! Backed by a UUID but treated as an opaque string at every boundary:
//! serialized as a string in JSON, parsed leniently from caller input.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque content item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID value
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Borrow the inner UUID
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse from string representation, trimming caller whitespace
    pub fn parse(s: &str) -> Result<Self, ItemIdParseError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ItemIdParseError::InvalidFormat)
    }
}

/// Error when parsing an ItemId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ItemIdParseError {
    #[error("invalid item id format")]
    InvalidFormat,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ItemId> for Uuid {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ItemId {
    type Err = ItemIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::parse(s)
    }
}
