//! Error types for the report API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use califica_core::Rol;
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the report API.
#[derive(Debug, thiserror::Error)]
pub enum ApiReportesError {
    /// Authenticated, but the role is outside the allow-list.
    #[error("Acceso denegado. Rol {0} no autorizado.")]
    Prohibido(Rol),

    /// No session.
    #[error("Autenticación requerida")]
    NoAutenticado,

    /// CSV serialization failed.
    #[error("Error generando el reporte: {0}")]
    Csv(String),

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

impl IntoResponse for ApiReportesError {
    fn into_response(self) -> Response {
        let (status, title, detail) = match &self {
            ApiReportesError::Prohibido(rol) => (
                StatusCode::FORBIDDEN,
                "Prohibido",
                format!("Acceso denegado. Rol {rol} no autorizado."),
            ),
            ApiReportesError::NoAutenticado => (
                StatusCode::UNAUTHORIZED,
                "No autorizado",
                "Sesión requerida".to_string(),
            ),
            ApiReportesError::Csv(msg) => {
                tracing::error!("CSV error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno",
                    "No se pudo generar el reporte".to_string(),
                )
            }
            ApiReportesError::BaseDeDatos(e) => {
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
