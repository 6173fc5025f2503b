//! Delete user handler.
//!
//! DELETE /usuarios/:id

use crate::error::ApiUsersError;
use crate::services::UsuarioService;
use axum::{extract::Path, http::StatusCode, Extension};
use califica_auth::SessionClaims;
use std::sync::Arc;
use uuid::Uuid;

/// Hard-delete a user. Self-deletion and deleting a rating owner are
/// refused; both leave the row untouched.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(("id" = Uuid, Path, description = "Id del usuario")),
    responses(
        (status = 204, description = "Usuario eliminado"),
        (status = 404, description = "No existe"),
        (status = 409, description = "Auto-eliminación o usuario con calificaciones"),
    ),
    security(("bearerAuth" = [])),
    tag = "Usuarios"
)]
pub async fn eliminar_usuario_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<UsuarioService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiUsersError> {
    service.eliminar(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
