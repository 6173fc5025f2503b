//! Application state shared across request handlers.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

/// Shared state. Cloned per request; the inner resources are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,

    /// Service startup time, for the health payload's uptime.
    pub startup_time: Arc<Instant>,
}

impl AppState {
    #[must_use]
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            startup_time: Arc::new(Instant::now()),
        }
    }
}
