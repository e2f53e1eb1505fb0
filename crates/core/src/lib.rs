//! Domain types and pure aggregation logic shared across the workspace.
//!
//! Nothing in this crate touches the database or the network; the API layer
//! fetches rows and passes them in.

pub mod alerts;
pub mod error;
pub mod roles;
pub mod telemetry;
pub mod types;
