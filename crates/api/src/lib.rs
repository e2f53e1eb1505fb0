//! AgriSense API server library.
//!
//! Everything lives in the library so the integration tests can assemble the
//! same router the binary serves; `main.rs` is just startup wiring.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
