//! Site settings handlers
//!
//! The settings document is a singleton; GET serves whatever is stored
//! (or an empty object before first save) and PUT upserts.

use axum::{extract::State, Json};
use content_service::SettingsService;
use serde_json::{Map, Value};

use crate::extractors::AdminToken;
use crate::response::{envelope, ApiResult};
use crate::state::AppState;

/// Fetch the site settings
///
/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    admin: AdminToken,
) -> ApiResult<Json<Value>> {
    admin.reject_invalid()?;

    let service = SettingsService::new(state.service_context());
    match service.get().await? {
        Some(settings) => envelope("Fetched successfully", "settings", &settings),
        None => envelope(
            "Fetched successfully",
            "settings",
            &Value::Object(Map::new()),
        ),
    }
}

/// Create or update the site settings
///
/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    admin: AdminToken,
    body: Option<Json<Value>>,
) -> ApiResult<Json<Value>> {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);

    let service = SettingsService::new(state.service_context());
    let settings = service
        .update(&body, admin.is_admin())
        .await
        .map_err(|e| admin.map_service_error(e))?;

    envelope("Site settings saved successfully", "settings", &settings)
}
