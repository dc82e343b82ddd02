//! Content collection handlers
//!
//! One generic set of endpoints serves every collection kind; the bound
//! kind arrives as a router extension.

use axum::{
    extract::{Extension, Query, State},
    Json,
};
use content_core::ContentKind;
use content_service::{ContentService, ItemSelector, ListOptions};
use serde::Deserialize;
use serde_json::Value;

use crate::extractors::AdminToken;
use crate::response::{envelope, message_only, sentence, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for collection reads
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReadQuery {
    slug: Option<String>,
    id: Option<String>,
    drafts: Option<String>,
    all: Option<String>,
}

/// Query parameters for deletes
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteQuery {
    id: Option<String>,
}

fn flag(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// List a collection, or fetch one item via `?slug=` / `?id=`
///
/// GET /api/{collection}
pub async fn list_or_get(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    admin: AdminToken,
    Query(query): Query<ReadQuery>,
) -> ApiResult<Json<Value>> {
    // A wrong credential fails even where none is required.
    admin.reject_invalid()?;

    let schema = kind.schema();
    let service = ContentService::new(state.service_context(), kind);

    if let Some(slug) = non_empty(&query.slug) {
        let item = service
            .get_one(&ItemSelector::Slug(slug.to_string()), admin.is_admin())
            .await?;
        return envelope("Fetched successfully", schema.key_one, &item);
    }

    if let Some(id) = non_empty(&query.id) {
        let item = service
            .get_one(&ItemSelector::Id(id.to_string()), admin.is_admin())
            .await?;
        return envelope("Fetched successfully", schema.key_one, &item);
    }

    let options = ListOptions {
        include_hidden: flag(&query.drafts),
        all: flag(&query.all),
    };
    let items = service.list(options, admin.is_admin()).await?;
    envelope("Fetched successfully", schema.key_many, &items)
}

/// Create a new item
///
/// POST /api/{collection}
pub async fn create(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    admin: AdminToken,
    body: Option<Json<Value>>,
) -> ApiResult<Created<Json<Value>>> {
    // An unreadable body sanitizes to nothing and fails validation.
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);

    let service = ContentService::new(state.service_context(), kind);
    let id = service
        .create(&body, admin.is_admin())
        .await
        .map_err(|e| admin.map_service_error(e))?;

    let message = sentence(kind.schema().display_name, "created successfully");
    Ok(Created(envelope(message, "id", &id)?))
}

/// Update an existing item; the identifier rides in the body
///
/// PUT /api/{collection}
pub async fn update(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    admin: AdminToken,
    body: Option<Json<Value>>,
) -> ApiResult<Json<Value>> {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);

    let service = ContentService::new(state.service_context(), kind);
    let item = service
        .update(&body, admin.is_admin())
        .await
        .map_err(|e| admin.map_service_error(e))?;

    let schema = kind.schema();
    envelope(
        sentence(schema.display_name, "updated successfully"),
        schema.key_one,
        &item,
    )
}

/// Delete an item via `?id=`
///
/// DELETE /api/{collection}
pub async fn remove(
    State(state): State<AppState>,
    Extension(kind): Extension<ContentKind>,
    admin: AdminToken,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<Json<Value>> {
    let service = ContentService::new(state.service_context(), kind);
    service
        .delete(query.id.as_deref(), admin.is_admin())
        .await
        .map_err(|e| admin.map_service_error(e))?;

    Ok(message_only(sentence(
        kind.schema().display_name,
        "deleted successfully",
    )))
}

/// CORS preflight and capability probe
///
/// OPTIONS /api/{collection}
pub async fn preflight() -> NoContent {
    NoContent
}
