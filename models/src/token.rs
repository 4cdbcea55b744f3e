use common::RedactedSecret;

use serde::Deserialize;

/// Body returned by `POST /tokens` on success.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: RedactedSecret,
}

/// Authentication token issued by the user service.
///
/// Created fresh per request and handed straight to the caller; nothing
/// keeps a copy. Debug output is redacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(RedactedSecret);

impl AuthToken {
    pub fn new(token: impl Into<RedactedSecret>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Give up the redaction wrapper and take the raw string.
    pub fn into_inner(self) -> String {
        self.0.as_str().to_string()
    }
}

impl From<TokenResponse> for AuthToken {
    fn from(response: TokenResponse) -> Self {
        Self(response.token)
    }
}
