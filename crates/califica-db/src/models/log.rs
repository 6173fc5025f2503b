//! Activity log model.
//!
//! Append-only. Every mutating handler writes exactly one entry; rows are
//! never updated or deleted. The actor reference is nulled when the actor
//! account is removed, so the trail outlives its authors.

use califica_core::Estado;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

/// Conventional action tags. Stored as TEXT via `Display`, so the stored
/// set stays open while handler code only produces these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAccion {
    InicioSesion,
    CierreSesion,
    CreacionUsuario,
    EdicionUsuario,
    EliminacionUsuario,
    CreacionCalificacion,
    EdicionFactores,
    /// Review decision; the tag names the resulting status.
    Revision(Estado),
    GeneracionReporte,
}

impl fmt::Display for LogAccion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogAccion::InicioSesion => f.write_str("Inicio de Sesión Exitoso"),
            LogAccion::CierreSesion => f.write_str("Cierre de Sesión Exitoso"),
            LogAccion::CreacionUsuario => f.write_str("Creación de Usuario"),
            LogAccion::EdicionUsuario => f.write_str("Edición de Usuario"),
            LogAccion::EliminacionUsuario => f.write_str("Eliminación de Usuario"),
            LogAccion::CreacionCalificacion => f.write_str("Creación de Calificación"),
            LogAccion::EdicionFactores => f.write_str("Edición de Factores"),
            LogAccion::Revision(estado) => write!(f, "Revisión de Calificación ({estado})"),
            LogAccion::GeneracionReporte => f.write_str("Generación de Reporte"),
        }
    }
}

/// A row of the activity log.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntry {
    pub id: Uuid,
    /// Acting user; `None` once the account has been deleted.
    pub usuario: Option<Uuid>,
    pub accion: String,
    pub fecha_hora: DateTime<Utc>,
    pub detalle_cambio: String,
}

/// Log row joined with the actor, for the auditor panel and the CSV export.
#[derive(Debug, Clone, FromRow)]
pub struct LogConUsuario {
    pub id: Uuid,
    pub fecha_hora: DateTime<Utc>,
    pub accion: String,
    pub usuario_id: Option<Uuid>,
    pub usuario_nombre: Option<String>,
    pub usuario_email: Option<String>,
    pub detalle_cambio: String,
}

impl LogEntry {
    /// Append an entry. Executor-generic so create/edit/delete flows can
    /// write it inside the same transaction as the mutation, while login,
    /// logout and report generation append independently.
    pub async fn registrar<'e, E>(
        executor: E,
        usuario: Option<Uuid>,
        accion: LogAccion,
        detalle: String,
    ) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            INSERT INTO logs (usuario, accion, detalle_cambio)
            VALUES ($1, $2, $3)
            RETURNING id, usuario, accion, fecha_hora, detalle_cambio
            ",
        )
        .bind(usuario)
        .bind(accion.to_string())
        .bind(detalle)
        .fetch_one(executor)
        .await
    }

    /// Recent entries with their actors, newest first, with the auditor
    /// panel's optional substring filter over accion/actor name/detail.
    pub async fn listar_recientes<'e, E>(
        executor: E,
        q: Option<&str>,
        limit: i64,
    ) -> Result<Vec<LogConUsuario>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut query = String::from(
            r"
            SELECT l.id, l.fecha_hora, l.accion, l.usuario AS usuario_id,
                   u.nombre AS usuario_nombre, u.email AS usuario_email, l.detalle_cambio
            FROM logs l
            LEFT JOIN usuarios u ON u.id = l.usuario
            ",
        );
        if q.is_some() {
            query.push_str(
                "WHERE l.accion ILIKE $2 OR u.nombre ILIKE $2 OR l.detalle_cambio ILIKE $2 ",
            );
        }
        query.push_str("ORDER BY l.fecha_hora DESC LIMIT $1");

        let mut stmt = sqlx::query_as::<_, LogConUsuario>(&query).bind(limit);
        if let Some(q) = q {
            stmt = stmt.bind(format!("%{}%", super::escape_like(q)));
        }
        stmt.fetch_all(executor).await
    }

    /// Full trail with actors, newest first — the logs CSV export.
    pub async fn listar_para_reporte<'e, E>(
        executor: E,
    ) -> Result<Vec<LogConUsuario>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            SELECT l.id, l.fecha_hora, l.accion, l.usuario AS usuario_id,
                   u.nombre AS usuario_nombre, u.email AS usuario_email, l.detalle_cambio
            FROM logs l
            LEFT JOIN usuarios u ON u.id = l.usuario
            ORDER BY l.fecha_hora DESC
            ",
        )
        .fetch_all(executor)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acciones_producen_los_textos_convencionales() {
        assert_eq!(LogAccion::InicioSesion.to_string(), "Inicio de Sesión Exitoso");
        assert_eq!(LogAccion::CreacionUsuario.to_string(), "Creación de Usuario");
        assert_eq!(
            LogAccion::Revision(Estado::Aprobada).to_string(),
            "Revisión de Calificación (Aprobada)"
        );
        assert_eq!(
            LogAccion::Revision(Estado::Rechazada).to_string(),
            "Revisión de Calificación (Rechazada)"
        );
        assert_eq!(LogAccion::GeneracionReporte.to_string(), "Generación de Reporte");
    }
}
