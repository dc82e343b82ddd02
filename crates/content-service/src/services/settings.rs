//! Site settings service - singleton document operations

use serde_json::Value;
use tracing::{info, instrument};

use content_core::{ContentKind, NewContentItem};

use crate::dto::ItemResponse;
use crate::sanitize::sanitize;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Service for the site settings singleton
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the settings document, if one has been written yet.
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<Option<ItemResponse>> {
        let item = self
            .ctx
            .content_repo()
            .find_singleton(ContentKind::Settings)
            .await?;
        Ok(item.as_ref().map(ItemResponse::from))
    }

    /// Create or update the settings document.
    ///
    /// An update merges the sanitized fields into the stored document and
    /// keeps its creation timestamp.
    #[instrument(skip(self, raw))]
    pub async fn update(&self, raw: &Value, is_admin: bool) -> ServiceResult<ItemResponse> {
        if !is_admin {
            return Err(ServiceError::Unauthorized);
        }

        let input = sanitize(ContentKind::Settings, raw);
        let existing = self
            .ctx
            .content_repo()
            .find_singleton(ContentKind::Settings)
            .await?;

        match existing {
            Some(mut item) => {
                item.merge_fields(input.fields);
                self.ctx.content_repo().update(&item).await?;
                info!(id = %item.id, "Site settings updated");
                Ok(ItemResponse::from(&item))
            }
            None => {
                let status = ContentKind::Settings
                    .schema()
                    .status
                    .visible_value()
                    .to_string();
                let item = NewContentItem::new(ContentKind::Settings, status, None, input.fields);
                let created = self.ctx.content_repo().insert(item).await?;
                info!(id = %created.id, "Site settings created");
                Ok(ItemResponse::from(&created))
            }
        }
    }
}
