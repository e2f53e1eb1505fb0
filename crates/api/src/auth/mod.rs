//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing for stored credentials.
//! - [`jwt`] -- issue and verify the HS256 bearer tokens.

pub mod jwt;
pub mod password;
