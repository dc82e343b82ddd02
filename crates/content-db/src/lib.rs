//! # content-db
//!
//! Store adapter implementing the content repository trait with PostgreSQL
//! via SQLx.
//!
//! ## Overview
//!
//! - [`ContentStore`]: a lazily initialized, process-wide connection pool.
//!   The first caller connects and runs the embedded migrations; concurrent
//!   first callers wait on the same initialization; everyone after that
//!   reuses the pool. A missing connection string surfaces per request as a
//!   configuration error instead of failing boot.
//! - [`PgContentRepository`]: the [`content_core::ContentRepository`]
//!   implementation over the single `content_items` table.

pub mod mappers;
pub mod models;
pub mod repositories;
pub mod store;

// Re-export commonly used types
pub use repositories::PgContentRepository;
pub use store::ContentStore;

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
