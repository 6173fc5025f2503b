//! Create user handler.
//!
//! POST /usuarios

use crate::error::ApiUsersError;
use crate::models::{CrearUsuarioRequest, UsuarioResponse};
use crate::services::UsuarioService;
use axum::{http::StatusCode, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;
use validator::Validate;

/// Create a user, attributing the action to the acting admin.
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CrearUsuarioRequest,
    responses(
        (status = 201, description = "Usuario creado", body = UsuarioResponse),
        (status = 409, description = "Email ya registrado"),
        (status = 422, description = "Formulario inválido"),
    ),
    security(("bearerAuth" = [])),
    tag = "Usuarios"
)]
pub async fn crear_usuario_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<UsuarioService>>,
    Json(request): Json<CrearUsuarioRequest>,
) -> Result<(StatusCode, Json<UsuarioResponse>), ApiUsersError> {
    request
        .validate()
        .map_err(|e| ApiUsersError::Validacion(e.to_string()))?;

    let usuario = service.crear(&claims, &request).await?;
    Ok((StatusCode::CREATED, Json(usuario.into())))
}
