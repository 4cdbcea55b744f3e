//! HTTP status codes as the user service reports them.

/// HTTP status code for error categorization.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// `201 Created`: the only success the user service answers with.
    pub const CREATED: Self = Self(201);
    /// `403 Forbidden`: credentials rejected.
    pub const FORBIDDEN: Self = Self(403);
    /// `409 Conflict`: the user already exists.
    pub const CONFLICT: Self = Self(409);

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_created(&self) -> bool {
        *self == Self::CREATED
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
