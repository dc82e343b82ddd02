//! Media upload handler
//!
//! Receives one multipart file and forwards it to the external media
//! host; nothing is written to local disk.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use content_common::AppError;
use content_service::{MediaService, MediaUpload};
use serde_json::Value;

use crate::extractors::AdminToken;
use crate::response::{envelope, ApiError, ApiResult};
use crate::state::AppState;

/// Upload a file to the media host
///
/// POST /api/media
pub async fn upload(
    State(state): State<AppState>,
    admin: AdminToken,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
    // Reject before buffering the body
    if !admin.is_admin() {
        return Err(admin.unauthorized());
    }

    let mut file: Option<MediaUpload> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        match field.name() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "upload.bin".to_string());
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                file = Some(MediaUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                    folder: None,
                });
            }
            Some("folder") => {
                let value = field.text().await.map_err(bad_multipart)?;
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    folder = Some(trimmed.to_string());
                }
            }
            _ => {}
        }
    }

    let mut upload = file.ok_or_else(|| {
        ApiError::App(AppError::Validation("file part is required".to_string()))
    })?;
    upload.folder = folder;

    let service = MediaService::new(state.service_context());
    let uploaded = service
        .upload(upload, admin.is_admin())
        .await
        .map_err(|e| admin.map_service_error(e))?;

    envelope("File uploaded successfully", "upload", &uploaded)
}

fn bad_multipart(err: MultipartError) -> ApiError {
    ApiError::App(AppError::InvalidInput(format!(
        "unreadable multipart body: {err}"
    )))
}
