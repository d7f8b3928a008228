use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is injected at construction so tests can
/// substitute their own.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gbc_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start time, reported as uptime by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: gbc_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
