//! Content item entity - one document in one kind's collection

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::schema::ContentKind;
use crate::value_objects::{ItemId, Slug};

/// A stored content item.
///
/// The kind-specific fields live in `fields`, already sanitized against the
/// kind's schema; `status` is always one of the kind's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: ItemId,
    pub kind: ContentKind,
    pub status: String,
    pub slug: Option<Slug>,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    /// Whether non-admin callers may see this item.
    pub fn is_visible(&self) -> bool {
        match self.kind.schema().status.hidden_value() {
            Some(hidden) => self.status != hidden,
            None => true,
        }
    }

    /// Get a text field value if present and a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Get an integer field value if present and numeric.
    pub fn field_int(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_i64)
    }

    /// Overwrite the given fields, leaving all others untouched.
    pub fn merge_fields(&mut self, fields: Map<String, Value>) {
        self.fields.extend(fields);
        self.touch();
    }

    /// Update the status value.
    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.touch();
    }

    /// Update the slug.
    pub fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
        self.touch();
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A content item that has not been persisted yet.
///
/// The store assigns the identifier on insert; everything else is fixed by
/// the caller up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContentItem {
    pub kind: ContentKind,
    pub status: String,
    pub slug: Option<Slug>,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewContentItem {
    /// Create a new unsaved item with both timestamps set to now.
    pub fn new(
        kind: ContentKind,
        status: String,
        slug: Option<Slug>,
        fields: Map<String, Value>,
    ) -> Self {
        let now = Utc::now();
        Self {
            kind,
            status,
            slug,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Materialize into a stored item once the store has assigned an id.
    pub fn into_item(self, id: ItemId) -> ContentItem {
        ContentItem {
            id,
            kind: self.kind,
            status: self.status,
            slug: self.slug,
            fields: self.fields,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
