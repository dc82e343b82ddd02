//! Content item model <-> entity mapper

use content_core::{ContentItem, ContentKind, DomainError, ItemId, Slug};
use serde_json::{Map, Value};

use crate::models::ContentItemModel;

/// Convert a database row to a ContentItem entity
impl TryFrom<ContentItemModel> for ContentItem {
    type Error = DomainError;

    fn try_from(model: ContentItemModel) -> Result<Self, Self::Error> {
        let kind = ContentKind::parse(&model.kind).map_err(|_| {
            DomainError::InternalError(format!("stored item has unknown kind: {}", model.kind))
        })?;

        // Stored slugs were normalized on the way in; re-normalizing is a
        // no-op but keeps the invariant local to the value object.
        let slug = match model.slug.as_deref() {
            Some(raw) => Some(Slug::normalize(raw).map_err(|_| {
                DomainError::InternalError("stored item has an empty slug".to_string())
            })?),
            None => None,
        };

        let fields = match model.fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(ContentItem {
            id: ItemId::new(model.id),
            kind,
            status: model.status,
            slug,
            fields,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
