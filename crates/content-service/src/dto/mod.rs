pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ItemSelector, ListOptions, MediaUpload};
pub use responses::{HealthResponse, ItemResponse, ReadinessResponse, UploadResponse};
