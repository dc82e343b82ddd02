//! Memoized PostgreSQL store handle
//!
//! The pool is created on first use, not at boot. The `OnceCell` acts as the
//! initialization barrier: exactly one caller runs the handshake while
//! concurrent callers wait for its outcome, and a failure leaves the cell
//! empty so a later request gets a fresh attempt. No call retries internally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;

use content_core::{DomainError, RepoResult};
use content_common::DatabaseConfig;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Lazily initialized, process-wide content store
pub struct ContentStore {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
    failure_logged: AtomicBool,
}

impl ContentStore {
    /// Create an uninitialized store handle. No connection is made here.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
            failure_logged: AtomicBool::new(false),
        }
    }

    /// Whether a connection string is configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Get the pool, connecting (and migrating) on first use.
    ///
    /// Fails with [`DomainError::StoreNotConfigured`] when no connection
    /// string is configured and [`DomainError::StoreUnavailable`] when the
    /// handshake fails.
    pub async fn pool(&self) -> RepoResult<&PgPool> {
        let Some(url) = self.config.url.as_deref() else {
            let err = DomainError::StoreNotConfigured;
            self.log_failure(&err);
            return Err(err);
        };

        let result = self
            .pool
            .get_or_try_init(|| self.connect_and_migrate(url))
            .await;

        match result {
            Ok(pool) => Ok(pool),
            Err(err) => {
                self.log_failure(&err);
                Err(err)
            }
        }
    }

    /// Round-trip a trivial query, initializing the store if needed.
    pub async fn ping(&self) -> RepoResult<()> {
        let pool = self.pool().await?;
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }

    async fn connect_and_migrate(&self, url: &str) -> Result<PgPool, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .min_connections(self.config.min_connections)
            .acquire_timeout(Duration::from_secs(self.config.connect_timeout_secs))
            .connect(url)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(format!("migration failed: {e}")))?;

        tracing::info!(
            max_connections = self.config.max_connections,
            "content store initialized"
        );
        Ok(pool)
    }

    /// First failure goes to the error log, repeats to debug.
    fn log_failure(&self, err: &DomainError) {
        if self.failure_logged.swap(true, Ordering::Relaxed) {
            tracing::debug!(error = %err, "content store unavailable");
        } else {
            tracing::error!(error = %err, "content store unavailable");
        }
    }
}
