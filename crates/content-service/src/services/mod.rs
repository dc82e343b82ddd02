//! Service implementations

pub mod content;
pub mod context;
pub mod error;
pub mod media;
pub mod settings;

pub use content::ContentService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use media::MediaService;
pub use settings::SettingsService;
