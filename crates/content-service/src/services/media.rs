//! Media upload service - passthrough to the external media host
//!
//! Files are never stored locally. An upload is forwarded to the configured
//! host as a multipart POST and the host's public URL comes back to the
//! caller.

use tracing::{info, instrument, warn};

use content_common::AppError;

use crate::dto::{MediaUpload, UploadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Service for media upload passthrough
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new media service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Forward one uploaded file to the media host.
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name))]
    pub async fn upload(&self, upload: MediaUpload, is_admin: bool) -> ServiceResult<UploadResponse> {
        if !is_admin {
            return Err(ServiceError::Unauthorized);
        }

        let media = self.ctx.media_config();
        let upload_url = media.upload_url.as_deref().ok_or_else(|| {
            ServiceError::App(AppError::Config(
                "MEDIA_UPLOAD_URL is not configured".to_string(),
            ))
        })?;

        let mut part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone());
        if let Some(content_type) = &upload.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|_| ServiceError::validation("invalid content type"))?;
        }

        let folder = upload.folder.as_deref().unwrap_or(&media.folder);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("folder", folder.to_string());

        let mut request = self.ctx.http_client().post(upload_url).multipart(form);
        if let Some(key) = &media.upload_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::upstream(format!("media host unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Media host rejected upload");
            return Err(ServiceError::upstream(format!(
                "media host returned {status}"
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ServiceError::upstream(format!("unreadable media host response: {e}")))?;

        let url = body
            .get("secure_url")
            .or_else(|| body.get("url"))
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| ServiceError::upstream("media host response carried no url"))?
            .to_string();
        let asset_id = body
            .get("public_id")
            .or_else(|| body.get("id"))
            .and_then(serde_json::Value::as_str)
            .map(String::from);

        info!(url = %url, "Media upload forwarded");
        Ok(UploadResponse { url, asset_id })
    }
}
