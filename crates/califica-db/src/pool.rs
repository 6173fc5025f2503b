//! Database connection pool.

use crate::error::DbError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Thin wrapper over [`PgPool`] with the service's connection defaults.
#[derive(Debug, Clone)]
pub struct DbPool {
    inner: PgPool,
}

impl DbPool {
    /// Connect with the default pool sizing.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::ConnectionFailed`] when the database is
    /// unreachable or the credentials are rejected.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let inner = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .map_err(DbError::ConnectionFailed)?;
        Ok(Self { inner })
    }

    /// The underlying pool.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.inner
    }
}
