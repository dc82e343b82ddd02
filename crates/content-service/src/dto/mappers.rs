//! Entity to response mapping.

use content_core::ContentItem;

use super::responses::ItemResponse;

impl From<&ContentItem> for ItemResponse {
    fn from(item: &ContentItem) -> Self {
        let schema = item.kind.schema();
        Self {
            id: item.id.to_string(),
            // Ungated kinds carry an internal status value but never
            // expose it.
            status: schema.status.is_gated().then(|| item.status.clone()),
            slug: item.slug.as_ref().map(|slug| slug.to_string()),
            fields: item.fields.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<ContentItem> for ItemResponse {
    fn from(item: ContentItem) -> Self {
        Self::from(&item)
    }
}
