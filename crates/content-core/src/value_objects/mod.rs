//! Value objects - identifiers and slugs

mod item_id;
mod slug;

pub use item_id::{ItemId, ItemIdParseError};
pub use slug::{Slug, SlugError};
