mod config;
mod status;
mod user_proxy_error;
