//! Error types for the rating lifecycle API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use califica_core::Rol;
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the rating lifecycle API.
#[derive(Debug, thiserror::Error)]
pub enum ApiCalificacionesError {
    /// Rating not found — also the answer for an ownership mismatch, so a
    /// corredor cannot probe for other corredores' ratings.
    #[error("Calificación no encontrada")]
    NoEncontrado,

    /// Request failed validation (bad factor set, malformed fields).
    #[error("Error de validación: {0}")]
    Validacion(String),

    /// The review decision token is outside {Aprobada, Rechazada}.
    #[error("Estado de revisión no válido.")]
    EstadoInvalido,

    /// The rating was already resolved and re-review is disabled.
    #[error("La calificación ya fue revisada.")]
    ReRevisionNoPermitida,

    /// Factor edits are only allowed while the rating is pending.
    #[error("Solo se pueden editar los factores de una calificación pendiente.")]
    NoEditable,

    /// Storage failure inside the creation transaction. Everything was
    /// rolled back; the caller gets a generic message.
    #[error("Error al guardar la calificación.")]
    ErrorAlGuardar,

    /// Authenticated, but the role is outside the allow-list.
    #[error("Acceso denegado. Rol {0} no autorizado.")]
    Prohibido(Rol),

    /// No session.
    #[error("Autenticación requerida")]
    NoAutenticado,

    /// Internal error.
    #[error("Error interno: {0}")]
    Interno(String),

    /// Database error.
    #[error("Error de base de datos: {0}")]
    BaseDeDatos(#[from] sqlx::Error),
}

/// RFC 7807 problem body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiCalificacionesError {
    fn into_response(self) -> Response {
        let (status, title, detail) = match &self {
            ApiCalificacionesError::NoEncontrado => (
                StatusCode::NOT_FOUND,
                "No encontrado",
                "Calificación no encontrada".to_string(),
            ),
            ApiCalificacionesError::Validacion(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Error de validación",
                msg.clone(),
            ),
            ApiCalificacionesError::EstadoInvalido => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Error de validación",
                "Estado de revisión no válido.".to_string(),
            ),
            ApiCalificacionesError::ReRevisionNoPermitida => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Error de validación",
                "La calificación ya fue revisada.".to_string(),
            ),
            ApiCalificacionesError::NoEditable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Error de validación",
                "Solo se pueden editar los factores de una calificación pendiente.".to_string(),
            ),
            ApiCalificacionesError::ErrorAlGuardar => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno",
                "Error al guardar la calificación.".to_string(),
            ),
            ApiCalificacionesError::Prohibido(rol) => (
                StatusCode::FORBIDDEN,
                "Prohibido",
                format!("Acceso denegado. Rol {rol} no autorizado."),
            ),
            ApiCalificacionesError::NoAutenticado => (
                StatusCode::UNAUTHORIZED,
                "No autorizado",
                "Sesión requerida".to_string(),
            ),
            ApiCalificacionesError::Interno(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno",
                    "Ocurrió un error interno".to_string(),
                )
            }
            ApiCalificacionesError::BaseDeDatos(e) => {
                tracing::error!("Database error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno",
                    "Ocurrió un error de base de datos".to_string(),
                )
            }
        };

        let problem = ProblemDetails {
            title: title.to_string(),
            status: status.as_u16(),
            detail: Some(detail),
        };
        (status, Json(problem)).into_response()
    }
}
