mod construction;
mod create_token;
mod create_user;
mod response_release;
