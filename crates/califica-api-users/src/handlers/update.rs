//! Edit user handler.
//!
//! PUT /usuarios/:id

use crate::error::ApiUsersError;
use crate::models::{ActualizarUsuarioRequest, UsuarioResponse};
use crate::services::UsuarioService;
use axum::{extract::Path, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Edit a user. A supplied password is re-hashed; an empty or absent one
/// keeps the stored hash.
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    params(("id" = Uuid, Path, description = "Id del usuario")),
    request_body = ActualizarUsuarioRequest,
    responses(
        (status = 200, description = "Usuario actualizado", body = UsuarioResponse),
        (status = 404, description = "No existe"),
        (status = 409, description = "Email ya registrado"),
        (status = 422, description = "Formulario inválido"),
    ),
    security(("bearerAuth" = [])),
    tag = "Usuarios"
)]
pub async fn editar_usuario_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<UsuarioService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarUsuarioRequest>,
) -> Result<Json<UsuarioResponse>, ApiUsersError> {
    request
        .validate()
        .map_err(|e| ApiUsersError::Validacion(e.to_string()))?;

    let usuario = service.editar(&claims, id, &request).await?;
    Ok(Json(usuario.into()))
}
