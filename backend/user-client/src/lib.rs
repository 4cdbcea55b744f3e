pub mod config;
pub mod error;
pub mod user_proxy;

#[cfg(test)]
mod tests;

pub use config::UserServiceConfig;
pub use error::config::ConfigError;
pub use error::user_proxy::UserProxyError;
pub use user_proxy::{UserProxy, UserServiceClient};

pub const USER_SERVICE_SCHEME: &str = "http";
pub const USER_SERVICE_USERS_ENDPOINT: &str = "users";
pub const USER_SERVICE_TOKENS_ENDPOINT: &str = "tokens";
