//! User entity model.

use super::escape_like;
use califica_core::Rol;
use chrono::NaiveDate;
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

const COLUMNS: &str = "id, rol, nombre, email, password_hash, fecha_reg, is_staff, is_active";

/// A system user.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,

    /// Role name from the closed set; the CHECK constraint keeps this
    /// parseable. Use [`Usuario::rol_enum`].
    pub rol: String,

    pub nombre: String,

    /// Unique across the system; matched exactly as stored at login.
    pub email: String,

    /// Argon2id PHC string.
    pub password_hash: String,

    pub fecha_reg: NaiveDate,
    pub is_staff: bool,
    pub is_active: bool,
}

/// Input for inserting a user. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NuevoUsuario {
    pub rol: Rol,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_active: bool,
}

impl Usuario {
    /// Role as the closed enum. `None` only if the CHECK constraint was
    /// bypassed out-of-band.
    #[must_use]
    pub fn rol_enum(&self) -> Option<Rol> {
        self.rol.parse().ok()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM usuarios WHERE id = $1"))
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Exact-match lookup, case-sensitive as stored.
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM usuarios WHERE email = $1"))
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    /// List users for the admin panel: optional exact role filter, optional
    /// case-insensitive substring over nombre/email, ordered by rol, nombre.
    pub async fn listar<'e, E>(
        executor: E,
        rol: Option<Rol>,
        q: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut conditions = Vec::new();
        let mut param_idx = 1;

        if rol.is_some() {
            conditions.push(format!("rol = ${param_idx}"));
            param_idx += 1;
        }
        if q.is_some() {
            conditions.push(format!(
                "(nombre ILIKE ${param_idx} OR email ILIKE ${param_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query =
            format!("SELECT {COLUMNS} FROM usuarios {where_clause} ORDER BY rol, nombre");

        let mut stmt = sqlx::query_as::<_, Self>(&query);
        if let Some(rol) = rol {
            stmt = stmt.bind(rol.to_string());
        }
        if let Some(q) = q {
            stmt = stmt.bind(format!("%{}%", escape_like(q)));
        }
        stmt.fetch_all(executor).await
    }

    /// Insert a new user.
    pub async fn crear<'e, E>(executor: E, nuevo: NuevoUsuario) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            r"
            INSERT INTO usuarios (rol, nombre, email, password_hash, is_staff, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "
        ))
        .bind(nuevo.rol.to_string())
        .bind(&nuevo.nombre)
        .bind(&nuevo.email)
        .bind(&nuevo.password_hash)
        .bind(nuevo.is_staff)
        .bind(nuevo.is_active)
        .fetch_one(executor)
        .await
    }

    /// Update role, name and email; replace the password hash only when a
    /// new one is supplied.
    pub async fn actualizar<'e, E>(
        executor: E,
        id: Uuid,
        rol: Rol,
        nombre: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            r"
            UPDATE usuarios
            SET rol = $2,
                nombre = $3,
                email = $4,
                password_hash = COALESCE($5, password_hash)
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(rol.to_string())
        .bind(nombre)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(executor)
        .await
    }

    /// Hard-delete a user. Returns the number of rows removed (0 when the
    /// id does not exist). Fails with a foreign-key violation when the user
    /// still owns calificaciones.
    pub async fn eliminar<'e, E>(executor: E, id: Uuid) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
