//! Lazily initialized store handle

mod content_store;

pub use content_store::ContentStore;
