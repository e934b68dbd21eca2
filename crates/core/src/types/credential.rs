//! Bearer credential types.
//!
//! Type-safe wrapper for the opaque token issued by the admin sign-in
//! endpoint and attached to authorized requests.

use serde::{Deserialize, Serialize};

/// An opaque bearer token.
///
/// Issued by `POST /admin/auth/signin` and sent back verbatim in the
/// `Authorization: Bearer <token>` header. The token contents are never
/// interpreted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token from the sign-in response.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format the token as an `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Convert into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<AuthToken> for String {
    fn from(token: AuthToken) -> Self {
        token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        let token = AuthToken::new("abc123");
        assert_eq!(token.bearer(), "Bearer abc123");
    }

    #[test]
    fn test_serde_transparent() {
        let token = AuthToken::new("abc123");
        let json = serde_json::to_string(&token).expect("serialize");
        assert_eq!(json, "\"abc123\"");
    }
}
