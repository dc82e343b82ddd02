//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::schema::ContentKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{} not found", .0.schema().display_name)]
    ItemNotFound(ContentKind),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid item id: {0}")]
    InvalidItemId(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slug already in use: {0}")]
    SlugTaken(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Content store is not configured")]
    StoreNotConfigured,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Content store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidItemId(_) => "INVALID_ITEM_ID",
            Self::SlugTaken(_) => "SLUG_TAKEN",
            Self::StoreNotConfigured => "STORE_NOT_CONFIGURED",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidItemId(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlugTaken(_))
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::StoreNotConfigured)
    }
}
