//! Service context - dependency container for services
//!
//! Holds the repository, store handle, and other dependencies needed by
//! services.

use std::sync::Arc;

use content_common::{AdminAuth, MediaConfig};
use content_core::ContentRepository;
use content_db::ContentStore;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - The content repository
/// - The lazy store handle (for readiness checks)
/// - Admin token verification
/// - Media host configuration and the HTTP client used to reach it
#[derive(Clone)]
pub struct ServiceContext {
    content_repo: Arc<dyn ContentRepository>,
    store: Arc<ContentStore>,
    admin_auth: AdminAuth,
    media: MediaConfig,
    http_client: reqwest::Client,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        store: Arc<ContentStore>,
        admin_auth: AdminAuth,
        media: MediaConfig,
    ) -> Self {
        Self {
            content_repo,
            store,
            admin_auth,
            media,
            http_client: reqwest::Client::new(),
        }
    }

    /// Get the content repository
    pub fn content_repo(&self) -> &dyn ContentRepository {
        self.content_repo.as_ref()
    }

    /// Get the store handle
    pub fn store(&self) -> &ContentStore {
        self.store.as_ref()
    }

    /// Get the admin token verifier
    pub fn admin_auth(&self) -> &AdminAuth {
        &self.admin_auth
    }

    /// Get the media host configuration
    pub fn media_config(&self) -> &MediaConfig {
        &self.media
    }

    /// Get the HTTP client for upstream calls
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("content_repo", &"...")
            .field("store_configured", &self.store.is_configured())
            .field("admin_configured", &self.admin_auth.is_configured())
            .finish()
    }
}
