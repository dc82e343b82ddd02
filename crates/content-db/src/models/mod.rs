//! Database models - SQLx-compatible structs for the content_items table

mod item;

pub use item::ContentItemModel;
