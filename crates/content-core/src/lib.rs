//! # content-core
//!
//! Domain layer containing the generic content item, per-kind schema
//! descriptors, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod schema;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ContentItem, NewContentItem};
pub use error::DomainError;
pub use schema::{ContentKind, FieldKind, FieldSpec, KindSchema, ListOrdering, StatusModel};
pub use traits::{ContentRepository, RepoResult};
pub use value_objects::{ItemId, ItemIdParseError, Slug, SlugError};
