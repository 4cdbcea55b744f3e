use common::ErrorLocation;
use models::ModelError;
use user_client::error::ClientError;
use user_client::{ConfigError, UserProxyError};

use thiserror::Error;

/// Errors surfaced by the `userctl` binary.
#[derive(Debug, Error)]
pub enum UserCtlError {
    /// Error from this binary's own setup (logging, runtime)
    #[error("Userctl Error: {message} {location}")]
    Userctl {
        message: String,
        location: ErrorLocation,
    },

    /// Error from user-client operations or configuration
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Credentials given on the command line were rejected before sending
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl UserCtlError {
    #[track_caller]
    pub fn userctl(message: impl Into<String>) -> Self {
        UserCtlError::Userctl {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    /// The user service error behind this failure, if any.
    pub fn user_proxy_error(&self) -> Option<&UserProxyError> {
        match self {
            UserCtlError::Client(ClientError::UserProxy(error)) => Some(error),
            _ => None,
        }
    }
}

impl From<UserProxyError> for UserCtlError {
    fn from(error: UserProxyError) -> Self {
        UserCtlError::Client(ClientError::UserProxy(error))
    }
}

impl From<ConfigError> for UserCtlError {
    fn from(error: ConfigError) -> Self {
        UserCtlError::Client(ClientError::Config(error))
    }
}
