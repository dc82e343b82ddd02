//! Admin token extractor
//!
//! Reads the `x-admin-token` header and verifies it against the configured
//! shared secret. Extraction itself never fails; handlers decide what an
//! unverified caller may do.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use content_common::AppError;
use content_service::ServiceError;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the admin credential
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenState {
    /// No token on the request
    Missing,
    /// A token was sent but does not verify
    Invalid,
    /// The token matches the configured secret
    Valid,
}

/// Admin status of the calling request
#[derive(Debug, Clone, Copy)]
pub struct AdminToken {
    state: TokenState,
}

impl AdminToken {
    /// Whether the caller proved admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.state == TokenState::Valid
    }

    /// Reject requests that sent a token that does not verify.
    ///
    /// Read endpoints call this so a wrong credential is reported even
    /// where none was required.
    pub fn reject_invalid(&self) -> Result<(), ApiError> {
        if self.state == TokenState::Invalid {
            return Err(ApiError::App(AppError::InvalidAdminToken));
        }
        Ok(())
    }

    /// The 401 matching this request's token state.
    #[must_use]
    pub fn unauthorized(&self) -> ApiError {
        match self.state {
            TokenState::Missing => ApiError::App(AppError::MissingAdminToken),
            TokenState::Invalid | TokenState::Valid => ApiError::App(AppError::InvalidAdminToken),
        }
    }

    /// Map a service failure, refining the generic unauthorized error
    /// into the 401 matching this request's token state.
    #[must_use]
    pub fn map_service_error(&self, err: ServiceError) -> ApiError {
        match err {
            ServiceError::Unauthorized => self.unauthorized(),
            other => ApiError::Service(other),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Blank header values count as no token at all.
        let supplied = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let app_state = AppState::from_ref(state);
        let state = match supplied {
            None => TokenState::Missing,
            Some(token) if app_state.admin_auth().verify(Some(token)) => TokenState::Valid,
            Some(_) => {
                tracing::warn!("Admin token rejected");
                TokenState::Invalid
            }
        };

        Ok(AdminToken { state })
    }
}
