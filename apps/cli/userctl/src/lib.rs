// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

use crate::cli::Command;
use crate::commands::Outcome;
use crate::error::UserCtlError;

use user_client::{UserServiceClient, UserServiceConfig};

use std::path::Path;

use log::info;

/// Load the config file, apply `USER_SERVICE_*` overrides and validate.
pub fn load_config(path: &Path) -> Result<UserServiceConfig, UserCtlError> {
    let config = UserServiceConfig::load(path)?.apply_env()?;
    config.validate()?;

    info!("User service at {}", config.base_url());
    Ok(config)
}

/// Build a client for `config` and run `command` against it.
pub async fn run(config: &UserServiceConfig, command: &Command) -> Result<Outcome, UserCtlError> {
    let client = UserServiceClient::new(config)?;
    commands::execute(&client, command).await
}
