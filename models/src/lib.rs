//! Domain models exchanged with the user service.
//!
//! Pure data: a [`User`] going out, an [`AuthToken`] coming back. The
//! HTTP adapter in `user-client` serializes these and nothing more.

pub mod error;
pub mod token;
pub mod user;


pub use error::model_error::ModelError;
pub use token::{AuthToken, TokenResponse};
pub use user::User;
pub use user::builder::UserBuilder;
