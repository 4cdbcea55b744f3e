use models::{ModelError, User, UserBuilder};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_CONFIG_PATH: &str = "userctl.toml";

#[derive(Debug, Parser)]
#[command(name = "userctl", about = "Create users and tokens on the user service")]
pub struct Cli {
    /// TOML file with hostname, port and timeout_secs
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Also write logs to this file
    #[arg(long, env = "USERCTL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new user
    CreateUser(Credentials),
    /// Exchange credentials for an authentication token
    CreateToken(Credentials),
}

#[derive(Debug, Args)]
pub struct Credentials {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "USERCTL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl Command {
    pub fn credentials(&self) -> &Credentials {
        match self {
            Command::CreateUser(credentials) | Command::CreateToken(credentials) => credentials,
        }
    }
}

impl Credentials {
    #[track_caller]
    pub fn to_user(&self) -> Result<User, ModelError> {
        UserBuilder::default()
            .with_email(self.email.as_str())
            .with_password(self.password.as_str())
            .build()
    }
}
