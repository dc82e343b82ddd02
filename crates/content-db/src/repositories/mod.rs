//! Repository implementations
//!
//! PostgreSQL implementation of the content repository trait defined in
//! content-core, backed by the lazily initialized store handle.

mod content;
mod error;

pub use content::PgContentRepository;
