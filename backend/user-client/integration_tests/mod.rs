mod helpers;
mod user_proxy;
