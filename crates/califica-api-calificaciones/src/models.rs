//! Request and response models for the rating lifecycle API.

use califica_db::{Calificacion, CalificacionConCreador, Factor, LogConUsuario};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// One (nombre, valor) pair of the factor form.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FactorValor {
    /// Catalog name ("Factor 8" .. "Factor 37").
    pub nombre: String,
    #[schema(value_type = String, example = "0.1250")]
    pub valor: Decimal,
}

/// Rating creation form.
///
/// `estado` and `origen` are intentionally absent: the server forces
/// Pendiente/Manual. An omitted factor list means all 29 at zero.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CrearCalificacionRequest {
    #[validate(length(min = 1, max = 50, message = "El mercado es obligatorio"))]
    pub mercado: String,
    #[validate(length(min = 1, max = 100, message = "El instrumento es obligatorio"))]
    pub instrumento: String,
    pub evento_capital: Option<String>,
    pub descripcion: Option<String>,
    #[serde(default)]
    #[schema(value_type = String, example = "1052.25000000")]
    pub valor_historico: Decimal,
    #[serde(default)]
    pub secuencia_evento: i32,
    #[validate(range(min = 1900, max = 2100, message = "Año fuera de rango"))]
    pub anio: i32,
    pub fecha_pago: NaiveDate,
    /// The complete 29-factor catalog, or nothing for all-zero factors.
    pub factores: Option<Vec<FactorValor>>,
}

/// Factor edit form: the full factor set, values only. Factor identity is
/// re-derived server-side from the stored rows by catalog name.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditarFactoresRequest {
    pub factores: Vec<FactorValor>,
}

/// Auditor decision form: `nuevo_estado` must be Aprobada or Rechazada.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RevisionRequest {
    pub nuevo_estado: String,
}

/// Panel filter: `?q=<texto>`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PanelQuery {
    pub q: Option<String>,
}

/// A rating as exposed to its creator and to auditors.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalificacionResponse {
    pub id: Uuid,
    pub mercado: String,
    pub instrumento: String,
    pub evento_capital: Option<String>,
    pub descripcion: Option<String>,
    #[schema(value_type = String)]
    pub valor_historico: Decimal,
    pub secuencia_evento: i32,
    pub anio: i32,
    pub fecha_pago: NaiveDate,
    pub estado: String,
    pub fecha_creacion: DateTime<Utc>,
    pub origen: String,
    pub usuario_creador: Uuid,
}

impl From<Calificacion> for CalificacionResponse {
    fn from(c: Calificacion) -> Self {
        Self {
            id: c.id,
            mercado: c.mercado,
            instrumento: c.instrumento,
            evento_capital: c.evento_capital,
            descripcion: c.descripcion,
            valor_historico: c.valor_historico,
            secuencia_evento: c.secuencia_evento,
            anio: c.anio,
            fecha_pago: c.fecha_pago,
            estado: c.estado,
            fecha_creacion: c.fecha_creacion,
            origen: c.origen,
            usuario_creador: c.usuario_creador,
        }
    }
}

/// One factor row of a rating.
#[derive(Debug, Serialize, ToSchema)]
pub struct FactorResponse {
    pub nombre: String,
    #[schema(value_type = String)]
    pub valor: Decimal,
}

impl From<Factor> for FactorResponse {
    fn from(f: Factor) -> Self {
        Self {
            nombre: f.nombre,
            valor: f.valor,
        }
    }
}

/// A rating with its factors — the edit and review views.
#[derive(Debug, Serialize, ToSchema)]
pub struct DetalleCalificacionResponse {
    pub calificacion: CalificacionResponse,
    pub factores: Vec<FactorResponse>,
}

/// Auditor panel row: rating plus creator.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalificacionResumenResponse {
    pub id: Uuid,
    pub instrumento: String,
    pub mercado: String,
    #[schema(value_type = String)]
    pub valor_historico: Decimal,
    pub anio: i32,
    pub estado: String,
    pub fecha_creacion: DateTime<Utc>,
    pub creador_nombre: String,
    pub creador_email: String,
}

impl From<CalificacionConCreador> for CalificacionResumenResponse {
    fn from(c: CalificacionConCreador) -> Self {
        Self {
            id: c.id,
            instrumento: c.instrumento,
            mercado: c.mercado,
            valor_historico: c.valor_historico,
            anio: c.anio,
            estado: c.estado,
            fecha_creacion: c.fecha_creacion,
            creador_nombre: c.creador_nombre,
            creador_email: c.creador_email,
        }
    }
}

/// Auditor panel log row.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogResumenResponse {
    pub id: Uuid,
    pub fecha_hora: DateTime<Utc>,
    pub accion: String,
    pub usuario_nombre: Option<String>,
    pub detalle_cambio: String,
}

impl From<LogConUsuario> for LogResumenResponse {
    fn from(l: LogConUsuario) -> Self {
        Self {
            id: l.id,
            fecha_hora: l.fecha_hora,
            accion: l.accion,
            usuario_nombre: l.usuario_nombre,
            detalle_cambio: l.detalle_cambio,
        }
    }
}

/// Auditor panel: every rating plus the recent activity trail.
#[derive(Debug, Serialize, ToSchema)]
pub struct PanelAuditorResponse {
    pub calificaciones: Vec<CalificacionResumenResponse>,
    pub logs: Vec<LogResumenResponse>,
}
