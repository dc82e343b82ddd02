//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the content store, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{ContentItem, NewContentItem};
use crate::error::DomainError;
use crate::schema::ContentKind;
use crate::value_objects::{ItemId, Slug};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Content Repository
// ============================================================================

/// The content store port: one collection per [`ContentKind`].
///
/// Implementations order lists per the kind's schema (recency, or manual
/// sort order for kinds that have one); visibility filtering happens here so
/// hidden items never leave the store for non-admin calls.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// List a kind's items in the kind's canonical order.
    ///
    /// With `include_hidden` false, items hidden from non-admin callers
    /// (drafts, inactive reviews) are filtered out.
    async fn list(&self, kind: ContentKind, include_hidden: bool) -> RepoResult<Vec<ContentItem>>;

    /// Find one item by id within a kind.
    async fn find_by_id(&self, kind: ContentKind, id: ItemId) -> RepoResult<Option<ContentItem>>;

    /// Find one item by slug within a kind.
    async fn find_by_slug(&self, kind: ContentKind, slug: &Slug)
        -> RepoResult<Option<ContentItem>>;

    /// Fetch the single item of a singleton kind, if one has been written.
    async fn find_singleton(&self, kind: ContentKind) -> RepoResult<Option<ContentItem>>;

    /// Check whether a slug is already taken within a kind.
    async fn slug_exists(&self, kind: ContentKind, slug: &Slug) -> RepoResult<bool>;

    /// Insert a new item; the store assigns and returns its identifier.
    async fn insert(&self, item: NewContentItem) -> RepoResult<ContentItem>;

    /// Persist changes to an existing item.
    async fn update(&self, item: &ContentItem) -> RepoResult<()>;

    /// Physically remove an item.
    async fn delete(&self, kind: ContentKind, id: ItemId) -> RepoResult<()>;
}
