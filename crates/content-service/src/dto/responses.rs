//! Response shapes returned by the services.
//!
//! Identifiers are serialized as strings and timestamps in camelCase,
//! matching what the site frontend consumes. Stored fields are
//! flattened to the top level of the item object; since the sanitizer
//! only admits schema fields, they can never collide with the fixed
//! keys.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Public shape of one content item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: String,
    /// Present only for kinds with a status gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Result of a media upload passthrough.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(rename = "assetId", skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
}

/// Liveness probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
}

/// Readiness probe payload. `database` reports the store check result;
/// a server without a configured store is still ready.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
