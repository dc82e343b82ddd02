//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use content_common::{AdminAuth, AppConfig, AppError};
use content_db::{ContentStore, PgContentRepository};
use content_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Neither the store nor the admin secret is required at boot. A missing
/// store URL degrades content requests to configuration errors, and a
/// missing admin secret rejects every admin operation.
pub fn create_app_state(config: AppConfig) -> AppState {
    let store = Arc::new(ContentStore::new(config.database.clone()));
    if store.is_configured() {
        info!("Content store configured; connections open on first use");
    } else {
        warn!("DATABASE_URL is not set. Content requests will fail until it is configured.");
    }

    let content_repo = Arc::new(PgContentRepository::new(store.clone()));

    let admin_auth = AdminAuth::new(config.admin.token.clone());
    if !admin_auth.is_configured() {
        warn!("ADMIN_TOKEN is not set. Every admin operation will be rejected.");
    }

    let service_context =
        ServiceContext::new(content_repo, store, admin_auth, config.media.clone());

    AppState::new(service_context, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config);

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
