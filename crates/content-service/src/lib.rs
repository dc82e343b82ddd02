//! Application services for the content server.
//!
//! This crate holds the business logic between the HTTP layer and the
//! store: input sanitization, admin gating, visibility rules, and the
//! media upload passthrough. Handlers construct a service per request
//! from a shared [`ServiceContext`] and translate [`ServiceError`]
//! values into HTTP responses.

pub mod dto;
pub mod sanitize;
pub mod services;

pub use dto::{
    HealthResponse, ItemResponse, ItemSelector, ListOptions, MediaUpload, ReadinessResponse,
    UploadResponse,
};
pub use sanitize::{sanitize, SanitizedInput};
pub use services::{
    ContentService, MediaService, ServiceContext, ServiceError, ServiceResult, SettingsService,
};
