//! Database migration management.

use crate::error::DbError;
use crate::pool::DbPool;

/// Run all pending migrations.
///
/// Migrations are embedded at compile time from `migrations/` and applied
/// in filename order. Role display rows are seeded here as well, so a
/// freshly migrated database always satisfies the superuser-bootstrap
/// precondition.
///
/// # Errors
///
/// Returns [`DbError::MigrationFailed`] if any migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    tracing::info!("Running database migrations");

    sqlx::migrate!("./migrations")
        .run(pool.inner())
        .await
        .map_err(DbError::MigrationFailed)?;

    tracing::info!("Migrations completed");
    Ok(())
}
