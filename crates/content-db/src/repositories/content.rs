//! PostgreSQL implementation of ContentRepository

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use content_core::{
    ContentItem, ContentKind, ContentRepository, DomainError, ItemId, ListOrdering, NewContentItem,
    RepoResult, Slug,
};

use crate::models::ContentItemModel;
use crate::store::ContentStore;

use super::error::{item_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ContentRepository
#[derive(Clone)]
pub struct PgContentRepository {
    store: Arc<ContentStore>,
}

impl PgContentRepository {
    /// Create a new PgContentRepository over a shared store handle
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    fn collect(rows: Vec<ContentItemModel>) -> RepoResult<Vec<ContentItem>> {
        rows.into_iter().map(ContentItem::try_from).collect()
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    #[instrument(skip(self))]
    async fn list(&self, kind: ContentKind, include_hidden: bool) -> RepoResult<Vec<ContentItem>> {
        let pool = self.store.pool().await?;

        // Ungated kinds have no hidden value, so the filter drops out even
        // for non-admin calls.
        let hidden = if include_hidden {
            None
        } else {
            kind.schema().status.hidden_value()
        };

        let rows = match (kind.schema().ordering, hidden) {
            (ListOrdering::Newest, None) => {
                sqlx::query_as::<_, ContentItemModel>(
                    r"
                    SELECT id, kind, status, slug, fields, seq, created_at, updated_at
                    FROM content_items
                    WHERE kind = $1
                    ORDER BY created_at DESC, seq DESC
                    ",
                )
                .bind(kind.as_str())
                .fetch_all(pool)
                .await
            }
            (ListOrdering::Newest, Some(hidden)) => {
                sqlx::query_as::<_, ContentItemModel>(
                    r"
                    SELECT id, kind, status, slug, fields, seq, created_at, updated_at
                    FROM content_items
                    WHERE kind = $1 AND status <> $2
                    ORDER BY created_at DESC, seq DESC
                    ",
                )
                .bind(kind.as_str())
                .bind(hidden)
                .fetch_all(pool)
                .await
            }
            (ListOrdering::SortOrderThenNewest, None) => {
                sqlx::query_as::<_, ContentItemModel>(
                    r"
                    SELECT id, kind, status, slug, fields, seq, created_at, updated_at
                    FROM content_items
                    WHERE kind = $1
                    ORDER BY COALESCE((fields->>'sortOrder')::BIGINT, 0) ASC,
                             created_at DESC, seq DESC
                    ",
                )
                .bind(kind.as_str())
                .fetch_all(pool)
                .await
            }
            (ListOrdering::SortOrderThenNewest, Some(hidden)) => {
                sqlx::query_as::<_, ContentItemModel>(
                    r"
                    SELECT id, kind, status, slug, fields, seq, created_at, updated_at
                    FROM content_items
                    WHERE kind = $1 AND status <> $2
                    ORDER BY COALESCE((fields->>'sortOrder')::BIGINT, 0) ASC,
                             created_at DESC, seq DESC
                    ",
                )
                .bind(kind.as_str())
                .bind(hidden)
                .fetch_all(pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Self::collect(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, kind: ContentKind, id: ItemId) -> RepoResult<Option<ContentItem>> {
        let pool = self.store.pool().await?;

        let row = sqlx::query_as::<_, ContentItemModel>(
            r"
            SELECT id, kind, status, slug, fields, seq, created_at, updated_at
            FROM content_items
            WHERE kind = $1 AND id = $2
            ",
        )
        .bind(kind.as_str())
        .bind(id.into_inner())
        .fetch_optional(pool)
        .await
        .map_err(map_db_error)?;

        row.map(ContentItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &Slug,
    ) -> RepoResult<Option<ContentItem>> {
        let pool = self.store.pool().await?;

        let row = sqlx::query_as::<_, ContentItemModel>(
            r"
            SELECT id, kind, status, slug, fields, seq, created_at, updated_at
            FROM content_items
            WHERE kind = $1 AND slug = $2
            ",
        )
        .bind(kind.as_str())
        .bind(slug.as_str())
        .fetch_optional(pool)
        .await
        .map_err(map_db_error)?;

        row.map(ContentItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_singleton(&self, kind: ContentKind) -> RepoResult<Option<ContentItem>> {
        let pool = self.store.pool().await?;

        let row = sqlx::query_as::<_, ContentItemModel>(
            r"
            SELECT id, kind, status, slug, fields, seq, created_at, updated_at
            FROM content_items
            WHERE kind = $1
            ORDER BY seq ASC
            LIMIT 1
            ",
        )
        .bind(kind.as_str())
        .fetch_optional(pool)
        .await
        .map_err(map_db_error)?;

        row.map(ContentItem::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, kind: ContentKind, slug: &Slug) -> RepoResult<bool> {
        let pool = self.store.pool().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM content_items WHERE kind = $1 AND slug = $2)
            ",
        )
        .bind(kind.as_str())
        .bind(slug.as_str())
        .fetch_one(pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, item))]
    async fn insert(&self, item: NewContentItem) -> RepoResult<ContentItem> {
        let pool = self.store.pool().await?;

        let id = ItemId::generate();
        let slug = item.slug.as_ref().map(Slug::as_str).map(String::from);

        sqlx::query(
            r"
            INSERT INTO content_items (id, kind, status, slug, fields, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(id.into_inner())
        .bind(item.kind.as_str())
        .bind(&item.status)
        .bind(slug.as_deref())
        .bind(Value::Object(item.fields.clone()))
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(pool)
        .await
        .map_err(|e| {
            // The partial unique index closes the slug pre-check race.
            map_unique_violation(e, || {
                DomainError::SlugTaken(slug.clone().unwrap_or_default())
            })
        })?;

        Ok(item.into_item(id))
    }

    #[instrument(skip(self, item))]
    async fn update(&self, item: &ContentItem) -> RepoResult<()> {
        let pool = self.store.pool().await?;

        let slug = item.slug.as_ref().map(Slug::as_str);

        let result = sqlx::query(
            r"
            UPDATE content_items
            SET status = $2, slug = $3, fields = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(item.id.into_inner())
        .bind(&item.status)
        .bind(slug)
        .bind(Value::Object(item.fields.clone()))
        .bind(item.updated_at)
        .execute(pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::SlugTaken(slug.unwrap_or_default().to_string())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(item.kind));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: ContentKind, id: ItemId) -> RepoResult<()> {
        let pool = self.store.pool().await?;

        let result = sqlx::query(
            r"
            DELETE FROM content_items
            WHERE kind = $1 AND id = $2
            ",
        )
        .bind(kind.as_str())
        .bind(id.into_inner())
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(kind));
        }

        Ok(())
    }
}
