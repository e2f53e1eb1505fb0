//! Response envelopes shared across resources.
//!
//! Every response body is a JSON object with a named top-level key. Most
//! envelopes name their resource (`{ "crops": [...] }`, `{ "sensor": {...} }`)
//! and are defined next to their handlers; [`MessageResponse`] covers the
//! message-only case shared across resources.

use serde::Serialize;

/// Standard `{ "message": "..." }` response body.
///
/// Used where a mutation has nothing else to report, e.g. a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
