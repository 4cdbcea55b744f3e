//! Shared building blocks for the user service workspace.
//!
//! Nothing in here knows about users or tokens. These are the small
//! value types every other crate leans on:
//!
//! - [`ErrorLocation`]: file/line/column captured with `#[track_caller]`
//! - [`HttpStatusCode`]: status codes stored as numbers, never parsed from text
//! - [`RedactedSecret`]: credentials that stay out of logs
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting value types
//! - **models**: user and token data passed between layers
//! - **user-client**: the HTTP adapter talking to the user service
//! - **userctl**: command-line wiring

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
