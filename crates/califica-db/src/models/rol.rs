//! Role display store.
//!
//! The authorization role lives on `usuarios.rol` as a closed set; these
//! rows only carry the human-readable description and back the bootstrap
//! precondition (a superuser cannot be created until the Administrador row
//! exists).

use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A row of the `roles` display table.
#[derive(Debug, Clone, FromRow)]
pub struct RolInfo {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
}

impl RolInfo {
    /// Look a role up by its exact name.
    pub async fn find_by_nombre<'e, E>(
        executor: E,
        nombre: &str,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as("SELECT id, nombre, descripcion FROM roles WHERE nombre = $1")
            .bind(nombre)
            .fetch_optional(executor)
            .await
    }

    /// All roles, ordered by name.
    pub async fn listar<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as("SELECT id, nombre, descripcion FROM roles ORDER BY nombre")
            .fetch_all(executor)
            .await
    }
}
