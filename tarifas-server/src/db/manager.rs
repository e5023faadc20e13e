//! Shared connection pool management
//!
//! One pool per process, opened on first use and reused until it reports
//! closed. The check-then-connect sequence holds a mutex, so concurrent
//! first requests serialize on a single connection attempt instead of
//! racing several.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tokio::sync::Mutex;

use tarifas_core::DatabaseConfig;

use super::DbError;

/// Lazily-initialized owner of the process-wide pool.
pub struct ConnectionManager {
    config: DatabaseConfig,
    pool: Mutex<Option<PgPool>>,
}

impl ConnectionManager {
    /// Store the settings without touching the network; the first
    /// [`acquire`](Self::acquire) opens the pool.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: Mutex::new(None),
        }
    }

    /// Return the shared pool, connecting if none is cached or the
    /// cached one has been closed.
    ///
    /// Idempotent and safe to call concurrently; callers get clones of
    /// the same pool handle.
    pub async fn acquire(&self) -> Result<PgPool, DbError> {
        let mut cached = self.pool.lock().await;

        if let Some(pool) = cached.as_ref() {
            if !pool.is_closed() {
                return Ok(pool.clone());
            }
        }

        tracing::debug!("opening database pool");
        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .connect_with(connect_options(&self.config)?)
            .await?;

        *cached = Some(pool.clone());
        Ok(pool)
    }

    /// Round-trip check: acquire and run a no-op query.
    pub async fn ping(&self) -> Result<(), DbError> {
        let pool = self.acquire().await?;
        sqlx::query_scalar::<_, i32>("SELECT 1 AS ok")
            .fetch_one(&pool)
            .await?;
        Ok(())
    }
}

fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, DbError> {
    if let Some(url) = &config.url {
        return Ok(url.parse::<PgConnectOptions>()?);
    }

    let ssl_mode = if config.encrypt {
        PgSslMode::Require
    } else {
        PgSslMode::Prefer
    };

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(ssl_mode))
}
