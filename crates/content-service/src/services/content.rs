//! Content collection service - business logic for content operations
//!
//! One generic engine covers every collection kind. A service instance is
//! bound to its kind at construction, and the kind's schema drives
//! sanitization, required-field checks, visibility, and slug handling.

use serde_json::Value;
use tracing::{info, instrument};

use content_core::{ContentKind, DomainError, ItemId, NewContentItem, Slug};

use crate::dto::{ItemResponse, ItemSelector, ListOptions};
use crate::sanitize::{sanitize, SanitizedInput};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Service for one kind's collection
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
    kind: ContentKind,
}

impl<'a> ContentService<'a> {
    /// Create a content service bound to one kind
    pub fn new(ctx: &'a ServiceContext, kind: ContentKind) -> Self {
        Self { ctx, kind }
    }

    /// The kind this service operates on
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// List the kind's items in its canonical order.
    ///
    /// Hidden items are included only when the caller is an admin who
    /// explicitly asked for them. The kind's list cap applies unless the
    /// caller asked for everything.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        options: ListOptions,
        is_admin: bool,
    ) -> ServiceResult<Vec<ItemResponse>> {
        let include_hidden = is_admin && options.include_hidden;
        let mut items = self
            .ctx
            .content_repo()
            .list(self.kind, include_hidden)
            .await?;

        if let Some(cap) = self.kind.schema().list_cap {
            if !options.all {
                items.truncate(cap);
            }
        }

        Ok(items.iter().map(ItemResponse::from).collect())
    }

    /// Fetch a single item by slug or id.
    ///
    /// Items hidden from the caller are reported as not found, never as
    /// forbidden, so the existence of drafts does not leak.
    #[instrument(skip(self))]
    pub async fn get_one(
        &self,
        selector: &ItemSelector,
        is_admin: bool,
    ) -> ServiceResult<ItemResponse> {
        let found = match selector {
            ItemSelector::Slug(raw) => match Slug::normalize(raw) {
                Ok(slug) => self.ctx.content_repo().find_by_slug(self.kind, &slug).await?,
                // An unusable slug matches nothing.
                Err(_) => None,
            },
            ItemSelector::Id(raw) => match ItemId::parse(raw) {
                Ok(id) => self.ctx.content_repo().find_by_id(self.kind, id).await?,
                Err(_) => None,
            },
        };

        let item = found.ok_or_else(|| self.not_found(selector.raw_value()))?;
        if !is_admin && !item.is_visible() {
            return Err(self.not_found(selector.raw_value()));
        }

        Ok(ItemResponse::from(&item))
    }

    /// Create a new item from a raw request body.
    ///
    /// Returns the identifier assigned by the store.
    #[instrument(skip(self, raw))]
    pub async fn create(&self, raw: &Value, is_admin: bool) -> ServiceResult<ItemId> {
        if !is_admin {
            return Err(ServiceError::Unauthorized);
        }

        let schema = self.kind.schema();
        let input = sanitize(self.kind, raw);
        self.check_required(&input, true)?;

        let slug = if schema.slugged {
            Some(self.resolve_new_slug(&input).await?)
        } else {
            None
        };

        let status = input
            .status
            .clone()
            .unwrap_or_else(|| schema.status.visible_value().to_string());

        let item = NewContentItem::new(self.kind, status, slug, input.fields);
        let created = self.ctx.content_repo().insert(item).await?;

        info!(kind = %self.kind, id = %created.id, "Content item created");
        Ok(created.id)
    }

    /// Update an existing item from a raw request body.
    ///
    /// Only fields present in the body change; the item keeps everything
    /// else, including its creation timestamp.
    #[instrument(skip(self, raw))]
    pub async fn update(&self, raw: &Value, is_admin: bool) -> ServiceResult<ItemResponse> {
        if !is_admin {
            return Err(ServiceError::Unauthorized);
        }

        let input = sanitize(self.kind, raw);
        let id = parse_required_id(input.id.as_deref())?;

        let mut item = self
            .ctx
            .content_repo()
            .find_by_id(self.kind, id)
            .await?
            .ok_or_else(|| self.not_found(id.to_string()))?;

        // A required field may be left out of a partial update, but it
        // cannot be blanked.
        self.check_required(&input, false)?;

        if let Some(raw_slug) = &input.slug {
            let slug = Slug::normalize(raw_slug)
                .map_err(|_| ServiceError::validation("slug cannot be empty"))?;
            if item.slug.as_ref() != Some(&slug) {
                if self.ctx.content_repo().slug_exists(self.kind, &slug).await? {
                    return Err(DomainError::SlugTaken(slug.into_inner()).into());
                }
                item.set_slug(slug);
            }
        }

        if let Some(status) = input.status.clone() {
            item.set_status(status);
        }

        item.merge_fields(input.fields);
        self.ctx.content_repo().update(&item).await?;

        info!(kind = %self.kind, id = %item.id, "Content item updated");
        Ok(ItemResponse::from(&item))
    }

    /// Physically remove an item.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<&str>, is_admin: bool) -> ServiceResult<()> {
        if !is_admin {
            return Err(ServiceError::Unauthorized);
        }

        let id = parse_required_id(id)?;
        self.ctx.content_repo().delete(self.kind, id).await?;

        info!(kind = %self.kind, id = %id, "Content item deleted");
        Ok(())
    }

    fn not_found(&self, id: impl Into<String>) -> ServiceError {
        ServiceError::not_found(self.kind.schema().display_name, id)
    }

    /// Required fields must carry content on create; on update they only
    /// need content when the request touches them.
    fn check_required(&self, input: &SanitizedInput, creating: bool) -> ServiceResult<()> {
        for name in self.kind.schema().required {
            let rejected = if creating {
                !input.has_content(name)
            } else {
                input.fields.contains_key(*name) && !input.has_content(name)
            };
            if rejected {
                return Err(ServiceError::validation(format!("{name} is required")));
            }
        }
        Ok(())
    }

    /// Pick the slug for a new item: the explicit one when supplied,
    /// otherwise derived from the title. Fails on a duplicate.
    ///
    /// The store's unique index backs this pre-check; a concurrent insert
    /// that slips past it still surfaces as the same conflict.
    async fn resolve_new_slug(&self, input: &SanitizedInput) -> ServiceResult<Slug> {
        let slug = match &input.slug {
            Some(explicit) => Slug::normalize(explicit)
                .map_err(|_| ServiceError::validation("slug cannot be empty"))?,
            None => {
                let title = input
                    .fields
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Slug::derive(title).ok_or_else(|| {
                    ServiceError::validation("slug could not be derived from title")
                })?
            }
        };

        if self.ctx.content_repo().slug_exists(self.kind, &slug).await? {
            return Err(DomainError::SlugTaken(slug.into_inner()).into());
        }

        Ok(slug)
    }
}

fn parse_required_id(raw: Option<&str>) -> ServiceResult<ItemId> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServiceError::validation("id is required"))?;
    ItemId::parse(raw).map_err(|_| ServiceError::validation("invalid item id"))
}
