use crate::USER_SERVICE_SCHEME;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use const_format::concatcp;
use log::{debug, info};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "USER_SERVICE_";
pub const HOSTNAME_ENV: &str = concatcp!(ENV_PREFIX, "HOSTNAME");
pub const PORT_ENV: &str = concatcp!(ENV_PREFIX, "PORT");
pub const TIMEOUT_SECS_ENV: &str = concatcp!(ENV_PREFIX, "TIMEOUT_SECS");

const DEFAULT_HOSTNAME: &str = "localhost";
const DEFAULT_PORT: u16 = 8180;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 300;

// ============================================
// CONFIG STRUCT
// ============================================

/// Where the user service lives and how long to wait for it.
///
/// Fixed once a client is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserServiceConfig {
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_hostname() -> String {
    DEFAULT_HOSTNAME.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ============================================
// IMPLEMENTATION
// ============================================

impl UserServiceConfig {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            ..Self::default()
        }
    }

    /// Set the request timeout, rounded up to whole seconds.
    ///
    /// Any non-zero duration stays non-zero: 500 ms becomes 1 s, 1500 ms 2 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let partial_second = u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = timeout.as_secs().saturating_add(partial_second);
        self
    }

    /// Load config from a TOML file.
    ///
    /// A missing file is not an error: defaults are returned so the
    /// environment alone can configure the client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::here(),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: UserServiceConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::here(),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Override fields from `USER_SERVICE_*` process environment variables.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Override fields from any variable source.
    ///
    /// `lookup` gets a variable name and returns its value if set.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(hostname) = lookup(HOSTNAME_ENV) {
            debug!("{HOSTNAME_ENV} overrides hostname");
            self.hostname = hostname;
        }

        if let Some(port) = lookup(PORT_ENV) {
            debug!("{PORT_ENV} overrides port");
            self.port = parse_override(PORT_ENV, &port)?;
        }

        if let Some(timeout) = lookup(TIMEOUT_SECS_ENV) {
            debug!("{TIMEOUT_SECS_ENV} overrides timeout");
            self.timeout_secs = parse_override(TIMEOUT_SECS_ENV, &timeout)?;
        }

        Ok(self)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigError::validation("hostname cannot be empty"));
        }

        // Scheme and path are fixed by the client
        if self.hostname.contains("://") || self.hostname.contains('/') {
            return Err(ConfigError::validation(format!(
                "hostname must be a bare host, got '{}'",
                self.hostname
            )));
        }

        if self.port == 0 {
            return Err(ConfigError::validation("port cannot be 0"));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::validation(format!(
                "Invalid timeout: {}s (must be 1-{MAX_TIMEOUT_SECS})",
                self.timeout_secs
            )));
        }

        Ok(())
    }

    /// `http://<hostname>:<port>`, no trailing path.
    pub fn base_url(&self) -> String {
        format!("{USER_SERVICE_SCHEME}://{}:{}", self.hostname, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[track_caller]
fn parse_override<T>(variable: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::EnvOverride {
            location: ErrorLocation::here(),
            variable,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
