//! Request extractors that run before handlers.
//!
//! - [`auth::AuthUser`] -- identifies the caller from the bearer token.

pub mod auth;
