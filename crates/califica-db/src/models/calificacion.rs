//! Calificacion (rating) entity model.

use super::escape_like;
use califica_core::Estado;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

const COLUMNS: &str = "id, mercado, instrumento, evento_capital, descripcion, valor_historico, \
                       secuencia_evento, anio, fecha_pago, estado, fecha_creacion, origen, \
                       usuario_creador, archivo_carga";

/// A tax-classification rating record.
#[derive(Debug, Clone, FromRow)]
pub struct Calificacion {
    pub id: Uuid,
    pub mercado: String,
    pub instrumento: String,
    pub evento_capital: Option<String>,
    pub descripcion: Option<String>,

    /// NUMERIC(18,8).
    pub valor_historico: Decimal,

    pub secuencia_evento: i32,
    pub anio: i32,
    pub fecha_pago: NaiveDate,

    /// Review status from the closed set; see [`Calificacion::estado_enum`].
    pub estado: String,

    pub fecha_creacion: DateTime<Utc>,
    pub origen: String,
    pub usuario_creador: Uuid,
    pub archivo_carga: Option<Uuid>,
}

/// Rating fields accepted from the creation form. Status, origin and
/// creator are never taken from the client.
#[derive(Debug, Clone)]
pub struct NuevaCalificacion {
    pub mercado: String,
    pub instrumento: String,
    pub evento_capital: Option<String>,
    pub descripcion: Option<String>,
    pub valor_historico: Decimal,
    pub secuencia_evento: i32,
    pub anio: i32,
    pub fecha_pago: NaiveDate,
}

/// Rating row joined with its creator, for the auditor panel and the CSV
/// export.
#[derive(Debug, Clone, FromRow)]
pub struct CalificacionConCreador {
    pub id: Uuid,
    pub instrumento: String,
    pub mercado: String,
    pub valor_historico: Decimal,
    pub anio: i32,
    pub estado: String,
    pub fecha_creacion: DateTime<Utc>,
    pub creador_nombre: String,
    pub creador_email: String,
}

impl Calificacion {
    /// Status as the closed enum. `None` only if the CHECK constraint was
    /// bypassed out-of-band.
    #[must_use]
    pub fn estado_enum(&self) -> Option<Estado> {
        self.estado.parse().ok()
    }

    /// Insert a rating for a creator. `estado` is forced to Pendiente and
    /// `origen` to Manual regardless of anything the client sent.
    pub async fn insertar<'e, E>(
        executor: E,
        nueva: &NuevaCalificacion,
        creador: Uuid,
    ) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            r"
            INSERT INTO calificaciones
                (mercado, instrumento, evento_capital, descripcion, valor_historico,
                 secuencia_evento, anio, fecha_pago, estado, origen, usuario_creador)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'Pendiente', 'Manual', $9)
            RETURNING {COLUMNS}
            "
        ))
        .bind(&nueva.mercado)
        .bind(&nueva.instrumento)
        .bind(&nueva.evento_capital)
        .bind(&nueva.descripcion)
        .bind(nueva.valor_historico)
        .bind(nueva.secuencia_evento)
        .bind(nueva.anio)
        .bind(nueva.fecha_pago)
        .bind(creador)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM calificaciones WHERE id = $1"))
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Ownership-scoped lookup. A mismatch is indistinguishable from a
    /// missing row, so non-owners learn nothing.
    pub async fn find_by_id_y_creador<'e, E>(
        executor: E,
        id: Uuid,
        creador: Uuid,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM calificaciones WHERE id = $1 AND usuario_creador = $2"
        ))
        .bind(id)
        .bind(creador)
        .fetch_optional(executor)
        .await
    }

    /// A corredor's own ratings, newest first, with the panel's optional
    /// substring filter over instrumento/estado.
    pub async fn listar_por_creador<'e, E>(
        executor: E,
        creador: Uuid,
        q: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut query = format!(
            "SELECT {COLUMNS} FROM calificaciones WHERE usuario_creador = $1"
        );
        if q.is_some() {
            query.push_str(" AND (instrumento ILIKE $2 OR estado ILIKE $2)");
        }
        query.push_str(" ORDER BY fecha_creacion DESC");

        let mut stmt = sqlx::query_as::<_, Self>(&query).bind(creador);
        if let Some(q) = q {
            stmt = stmt.bind(format!("%{}%", escape_like(q)));
        }
        stmt.fetch_all(executor).await
    }

    /// Every rating with its creator, newest first. Optional filter over
    /// instrumento/estado/creator name (auditor panel); the CSV export
    /// passes `None` for a full scan.
    pub async fn listar_con_creador<'e, E>(
        executor: E,
        q: Option<&str>,
    ) -> Result<Vec<CalificacionConCreador>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut query = String::from(
            r"
            SELECT c.id, c.instrumento, c.mercado, c.valor_historico, c.anio, c.estado,
                   c.fecha_creacion, u.nombre AS creador_nombre, u.email AS creador_email
            FROM calificaciones c
            JOIN usuarios u ON u.id = c.usuario_creador
            ",
        );
        if q.is_some() {
            query.push_str(
                "WHERE c.instrumento ILIKE $1 OR c.estado ILIKE $1 OR u.nombre ILIKE $1 ",
            );
        }
        query.push_str("ORDER BY c.fecha_creacion DESC");

        let mut stmt = sqlx::query_as::<_, CalificacionConCreador>(&query);
        if let Some(q) = q {
            stmt = stmt.bind(format!("%{}%", escape_like(q)));
        }
        stmt.fetch_all(executor).await
    }

    /// Set the review status. Returns the updated row, `None` if the id
    /// does not exist.
    pub async fn actualizar_estado<'e, E>(
        executor: E,
        id: Uuid,
        estado: Estado,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            "UPDATE calificaciones SET estado = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(estado.to_string())
        .fetch_optional(executor)
        .await
    }
}
