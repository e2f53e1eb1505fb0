use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Cloned per request, so everything inside is either `Arc`ed or a cheap
/// handle already.
#[derive(Clone)]
pub struct AppState {
    pub pool: agrisense_db::DbPool,
    /// Startup configuration; handlers mostly reach in for the JWT settings.
    pub config: Arc<ServerConfig>,
}
