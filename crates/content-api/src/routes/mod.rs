//! Route definitions
//!
//! One route per collection kind mounted under /api, plus the settings
//! singleton, the media passthrough, and health probes.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use content_core::ContentKind;

use crate::handlers::{content, health, media, settings};
use crate::response::ApiError;
use crate::state::AppState;

/// Largest media upload accepted before the passthrough rejects the body.
const MEDIA_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Create the main API router with all routes (excluding health, which is mounted at the root)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
}

/// Health check routes (served outside /api so probes stay unversioned)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Collection, settings, and media routes
fn api_routes() -> Router<AppState> {
    let mut router = Router::new();
    for kind in ContentKind::RESOURCES {
        router = router.merge(collection_routes(kind));
    }
    router.merge(settings_routes()).merge(media_routes())
}

/// The five verbs every collection shares, with the kind injected per route
fn collection_routes(kind: ContentKind) -> Router<AppState> {
    Router::new().route(
        &format!("/{}", route_segment(kind)),
        get(content::list_or_get)
            .post(content::create)
            .put(content::update)
            .delete(content::remove)
            .options(content::preflight)
            .layer(Extension(kind)),
    )
}

/// Settings singleton routes
fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(settings::get_settings)
            .put(settings::update_settings)
            .options(content::preflight),
    )
}

/// Media passthrough routes
fn media_routes() -> Router<AppState> {
    Router::new().route(
        "/media",
        post(media::upload)
            .options(content::preflight)
            .layer(DefaultBodyLimit::max(MEDIA_BODY_LIMIT)),
    )
}

/// URL segment each collection is served under
const fn route_segment(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Blog => "blogs",
        ContentKind::Team => "team",
        ContentKind::Position => "positions",
        ContentKind::Event => "events",
        ContentKind::Gallery => "gallery",
        ContentKind::Review => "reviews",
        ContentKind::Work => "work",
        ContentKind::Settings => "settings",
    }
}

/// Enveloped 404 for unknown paths
async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
