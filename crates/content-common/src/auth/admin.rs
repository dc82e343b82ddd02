//! Shared-secret admin authentication
//!
//! One static credential gates every write. Verification fails closed: no
//! configured secret means no caller is ever admin, and the comparison runs
//! in constant time regardless of where the inputs differ.

use subtle::ConstantTimeEq;

/// Verifier for the shared admin secret
#[derive(Debug, Clone)]
pub struct AdminAuth {
    secret: Option<String>,
}

impl AdminAuth {
    /// Create a verifier from an optional configured secret.
    ///
    /// Empty or whitespace-only secrets count as unconfigured.
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret.and_then(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });
        Self { secret }
    }

    /// Whether a secret is configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Verify a supplied token against the configured secret.
    ///
    /// Returns `false` when no secret is configured or no token was supplied.
    #[must_use]
    pub fn verify(&self, supplied: Option<&str>) -> bool {
        let Some(secret) = &self.secret else {
            return false;
        };
        let Some(supplied) = supplied else {
            return false;
        };
        secret.as_bytes().ct_eq(supplied.as_bytes()).unwrap_u8() == 1
    }
}
