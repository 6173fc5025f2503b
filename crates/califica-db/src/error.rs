//! Error types for the califica-db crate.

use thiserror::Error;

/// Database infrastructure errors.
///
/// Model query methods return `sqlx::Error` directly; this type covers the
/// pool and migration lifecycle where more context helps operators.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database connection.
    #[error("database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A migration failed to apply.
    #[error("migration failed: {0}")]
    MigrationFailed(#[source] sqlx::migrate::MigrateError),
}
