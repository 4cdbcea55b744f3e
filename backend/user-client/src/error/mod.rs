pub mod config;
pub mod user_proxy;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    UserProxy(#[from] user_proxy::UserProxyError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
