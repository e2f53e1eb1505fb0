//! Well-known role name constants.
//!
//! `ROLE_FARMER` must match the `users.role` column default in
//! `0001_initial_schema.sql`.

pub const ROLE_FARMER: &str = "farmer";
