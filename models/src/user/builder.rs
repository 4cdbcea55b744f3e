use crate::{ModelError, User};

use common::RedactedSecret;

/// Builder for creating validated User instances.
#[derive(Debug, Default)]
pub struct UserBuilder {
    email: Option<String>,
    password: Option<RedactedSecret>,
}

impl UserBuilder {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<RedactedSecret>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Build the User with validation.
    ///
    /// Only shape is checked (email has an `@`, password non-empty); whether
    /// the account is acceptable is the user service's call.
    #[track_caller]
    pub fn build(self) -> Result<User, ModelError> {
        let email = self
            .email
            .ok_or_else(|| ModelError::validation("Email is required"))?;

        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(ModelError::validation("Email cannot be empty"));
        }

        if !email.contains('@') {
            return Err(ModelError::validation(format!(
                "Email '{email}' is missing '@'"
            )));
        }

        let password = self
            .password
            .ok_or_else(|| ModelError::validation("Password is required"))?;

        if password.is_empty() {
            return Err(ModelError::validation("Password cannot be empty"));
        }

        Ok(User { email, password })
    }
}
