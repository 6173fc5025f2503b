//! Error types for the user management API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use califica_core::Rol;
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the user management API.
#[derive(Debug, thiserror::Error)]
pub enum ApiUsersError {
    /// User not found.
    #[error("Usuario no encontrado")]
    NoEncontrado,

    /// Email already taken.
    #[error("El email ya está registrado")]
    EmailConflicto,

    /// Request failed validation.
    #[error("Error de validación: {0}")]
    Validacion(String),

    /// An administrator may not delete their own account.
    #[error("No puede eliminar su propia cuenta")]
    AutoEliminacion,

    /// The user still owns calificaciones; deleting would destroy
    /// audit-relevant records.
    #[error("El usuario tiene calificaciones asociadas")]
    UsuarioConCalificaciones,

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

impl IntoResponse for ApiUsersError {
    fn into_response(self) -> Response {
        let (status, title, detail) = match &self {
            ApiUsersError::NoEncontrado => (
                StatusCode::NOT_FOUND,
                "No encontrado",
                "Usuario no encontrado".to_string(),
            ),
            ApiUsersError::EmailConflicto => (
                StatusCode::CONFLICT,
                "Conflicto",
                "El email ya está registrado".to_string(),
            ),
            ApiUsersError::Validacion(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Error de validación",
                msg.clone(),
            ),
            ApiUsersError::AutoEliminacion => (
                StatusCode::CONFLICT,
                "Conflicto",
                "No puede eliminar su propia cuenta".to_string(),
            ),
            ApiUsersError::UsuarioConCalificaciones => (
                StatusCode::CONFLICT,
                "Conflicto",
                "El usuario tiene calificaciones asociadas y no puede eliminarse".to_string(),
            ),
            ApiUsersError::Prohibido(rol) => (
                StatusCode::FORBIDDEN,
                "Prohibido",
                format!("Acceso denegado. Rol {rol} no autorizado."),
            ),
            ApiUsersError::NoAutenticado => (
                StatusCode::UNAUTHORIZED,
                "No autorizado",
                "Sesión requerida".to_string(),
            ),
            ApiUsersError::Interno(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno",
                    "Ocurrió un error interno".to_string(),
                )
            }
            ApiUsersError::BaseDeDatos(e) => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prohibido_nombra_el_rol() {
        let err = ApiUsersError::Prohibido(Rol::Corredor);
        assert_eq!(
            err.to_string(),
            "Acceso denegado. Rol Corredor no autorizado."
        );
    }
}
