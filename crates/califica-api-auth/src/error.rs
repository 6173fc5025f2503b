//! Error types for the authentication API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the authentication API.
#[derive(Debug, thiserror::Error)]
pub enum ApiAuthError {
    /// Unknown email or wrong password. One message for both, so the
    /// response never discloses which check failed.
    #[error("Usuario o contraseña incorrectos.")]
    CredencialesInvalidas,

    /// Missing or invalid session token.
    #[error("Autenticación requerida")]
    NoAutenticado,

    /// Request failed validation.
    #[error("Error de validación: {0}")]
    Validacion(String),

    /// Resource not found.
    #[error("No encontrado")]
    NoEncontrado,

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

impl ProblemDetails {
    pub(crate) fn new(status: StatusCode, title: &str, detail: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            status: status.as_u16(),
            detail: Some(detail.into()),
        }
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let (status, problem) = match &self {
            ApiAuthError::CredencialesInvalidas => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails::new(
                    StatusCode::UNAUTHORIZED,
                    "No autorizado",
                    "Usuario o contraseña incorrectos.",
                ),
            ),
            ApiAuthError::NoAutenticado => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails::new(
                    StatusCode::UNAUTHORIZED,
                    "No autorizado",
                    "Sesión requerida",
                ),
            ),
            ApiAuthError::Validacion(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ProblemDetails::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Error de validación",
                    msg.clone(),
                ),
            ),
            ApiAuthError::NoEncontrado => (
                StatusCode::NOT_FOUND,
                ProblemDetails::new(StatusCode::NOT_FOUND, "No encontrado", "No encontrado"),
            ),
            ApiAuthError::Interno(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Error interno",
                        "Ocurrió un error interno",
                    ),
                )
            }
            ApiAuthError::BaseDeDatos(e) => {
                tracing::error!("Database error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Error interno",
                        "Ocurrió un error de base de datos",
                    ),
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credenciales_invalidas_usa_el_mensaje_uniforme() {
        assert_eq!(
            ApiAuthError::CredencialesInvalidas.to_string(),
            "Usuario o contraseña incorrectos."
        );
    }
}
