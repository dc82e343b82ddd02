//! Domain entities - the generic content item

mod item;

pub use item::{ContentItem, NewContentItem};
