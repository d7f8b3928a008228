//! Database access layer: connection pool factory, migrations runner,
//! models, and repositories.

pub mod models;
pub mod repositories;
pub mod seed;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default connection-acquire timeout in seconds. Requests that cannot get
/// a connection within this window fail instead of queueing indefinitely.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Connection pool configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Full connection URL.
    pub database_url: String,
    /// Upper bound on concurrent connections.
    pub max_connections: u32,
    /// How long to wait for a free connection before failing.
    pub acquire_timeout_secs: u64,
}

impl PoolConfig {
    /// Load pool configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from
    /// `DB_HOST` (localhost), `DB_PORT` (5432), `DB_NAME`, `DB_USER`,
    /// and `DB_PASSWORD`. Pool sizing comes from `DB_MAX_CONNECTIONS`
    /// (10) and `DB_ACQUIRE_TIMEOUT_SECS` (5).
    ///
    /// # Panics
    ///
    /// Panics if neither `DATABASE_URL` nor `DB_NAME`/`DB_USER` are set,
    /// or if a numeric variable fails to parse.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
            let port = std::env::var("DB_PORT").unwrap_or_else(|_| "5432".into());
            let name = std::env::var("DB_NAME")
                .expect("DATABASE_URL or DB_NAME must be set in the environment");
            let user = std::env::var("DB_USER")
                .expect("DATABASE_URL or DB_USER must be set in the environment");
            let password = std::env::var("DB_PASSWORD").unwrap_or_default();
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        });

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
        }
    }
}

/// Create a bounded connection pool from the given configuration.
pub async fn create_pool(config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
///
/// Safe to call on every startup: already-applied migrations are skipped,
/// and the DDL itself is written idempotently (`IF NOT EXISTS`).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
