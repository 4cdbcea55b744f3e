//! Errors returned by calls to the user service.
//!
//! Transport failures keep the original `reqwest::Error` as their source.
//! Status codes are stored as [`HttpStatusCode`], never parsed out of text.

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum UserProxyError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config Error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("User Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    #[error("User Already Exists {location}")]
    UserExists { location: ErrorLocation },

    #[error("Unexpected Status: HTTP {status_code} {location}")]
    UnexpectedStatus {
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl UserProxyError {
    #[track_caller]
    pub fn serialization(error: &serde_json::Error) -> Self {
        UserProxyError::Serialization {
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn decode(error: &reqwest::Error) -> Self {
        UserProxyError::Decode {
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn forbidden() -> Self {
        UserProxyError::Forbidden {
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn user_exists() -> Self {
        UserProxyError::UserExists {
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn unexpected_status(status_code: HttpStatusCode) -> Self {
        UserProxyError::UnexpectedStatus {
            status_code,
            location: ErrorLocation::here(),
        }
    }

    /// True when the request never completed because the timeout fired.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            UserProxyError::Http {
                is_timeout: true,
                ..
            }
        )
    }

    /// Status code the user service answered with, if this error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UserProxyError::Forbidden { .. } => Some(HttpStatusCode::FORBIDDEN.as_u16()),
            UserProxyError::UserExists { .. } => Some(HttpStatusCode::CONFLICT.as_u16()),
            UserProxyError::UnexpectedStatus { status_code, .. } => Some(status_code.as_u16()),
            _ => None,
        }
    }

    /// Short label for log lines and exit reporting.
    pub fn error_category(&self) -> &'static str {
        match self {
            UserProxyError::Serialization { .. } => "serialization",
            UserProxyError::Config { .. } => "config",
            UserProxyError::UrlParse { .. } => "url_parse",
            UserProxyError::Http {
                is_timeout: true, ..
            } => "timeout",
            UserProxyError::Http {
                is_connection: true,
                ..
            } => "connection",
            UserProxyError::Http { .. } => "transport",
            UserProxyError::Forbidden { .. } => "forbidden",
            UserProxyError::UserExists { .. } => "user_exists",
            UserProxyError::UnexpectedStatus { status_code, .. }
                if status_code.is_server_error() =>
            {
                "server_error"
            }
            UserProxyError::UnexpectedStatus { .. } => "unexpected_status",
            UserProxyError::Decode { .. } => "decode",
        }
    }
}

impl From<ConfigError> for UserProxyError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        UserProxyError::Config {
            source: error,
            location: ErrorLocation::here(),
        }
    }
}

impl From<url::ParseError> for UserProxyError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        UserProxyError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }
}

impl From<reqwest::Error> for UserProxyError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        UserProxyError::Http {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            source: error,
            location: ErrorLocation::here(),
        }
    }
}
