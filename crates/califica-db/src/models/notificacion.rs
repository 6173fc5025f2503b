//! Notification model.
//!
//! Created when an auditor resolves a rating, so the corredor learns the
//! outcome on their next visit.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A notification addressed to one user.
#[derive(Debug, Clone, FromRow)]
pub struct Notificacion {
    pub id: Uuid,
    /// Addressee; `None` once the account has been deleted.
    pub usuario: Option<Uuid>,
    pub tipo: String,
    pub mensaje: String,
    pub fecha_envio: DateTime<Utc>,
    pub leida: bool,
}

impl Notificacion {
    /// Create a notification. Executor-generic so it can join the
    /// transaction of the action that triggered it.
    pub async fn crear<'e, E>(
        executor: E,
        usuario: Uuid,
        tipo: &str,
        mensaje: String,
    ) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            INSERT INTO notificaciones (usuario, tipo, mensaje)
            VALUES ($1, $2, $3)
            RETURNING id, usuario, tipo, mensaje, fecha_envio, leida
            ",
        )
        .bind(usuario)
        .bind(tipo)
        .bind(mensaje)
        .fetch_one(executor)
        .await
    }

    /// A user's notifications, unread first, newest first.
    pub async fn listar_por_usuario<'e, E>(
        executor: E,
        usuario: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            "SELECT id, usuario, tipo, mensaje, fecha_envio, leida FROM notificaciones \
             WHERE usuario = $1 ORDER BY leida, fecha_envio DESC",
        )
        .bind(usuario)
        .fetch_all(executor)
        .await
    }

    /// Mark one of the user's notifications as read. Returns the number of
    /// rows touched (0 when the id is not theirs).
    pub async fn marcar_leida<'e, E>(
        executor: E,
        id: Uuid,
        usuario: Uuid,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query("UPDATE notificaciones SET leida = TRUE WHERE id = $1 AND usuario = $2")
                .bind(id)
                .bind(usuario)
                .execute(executor)
                .await?;
        Ok(result.rows_affected())
    }
}
