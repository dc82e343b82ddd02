//! Content item database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the content_items table
#[derive(Debug, Clone, FromRow)]
pub struct ContentItemModel {
    pub id: Uuid,
    pub kind: String,
    pub status: String,
    pub slug: Option<String>,
    pub fields: serde_json::Value,
    pub seq: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
