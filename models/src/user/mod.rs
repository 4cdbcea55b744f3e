pub mod builder;

use common::RedactedSecret;

use serde::{Deserialize, Serialize};

/// Credentials identifying a user of the remote user service.
///
/// Serialized as `{"email": "...", "password": "..."}` for both account
/// creation and token requests. No invariants are enforced here; use
/// [`builder::UserBuilder`] when input comes from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: RedactedSecret,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<RedactedSecret>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
