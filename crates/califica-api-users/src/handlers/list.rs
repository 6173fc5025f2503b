//! User listing handler.
//!
//! GET /usuarios?rol=<Rol>&q=<texto>

use crate::error::ApiUsersError;
use crate::models::{ListarUsuariosQuery, UsuarioResponse};
use crate::services::UsuarioService;
use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

/// List users for the admin panel, optionally filtered by role and by a
/// substring over nombre/email.
#[utoipa::path(
    get,
    path = "/usuarios",
    params(ListarUsuariosQuery),
    responses(
        (status = 200, description = "Usuarios del sistema", body = [UsuarioResponse]),
        (status = 401, description = "Sin sesión"),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Usuarios"
)]
pub async fn listar_usuarios_handler(
    Extension(service): Extension<Arc<UsuarioService>>,
    Query(query): Query<ListarUsuariosQuery>,
) -> Result<Json<Vec<UsuarioResponse>>, ApiUsersError> {
    let usuarios = service.listar(&query).await?;
    Ok(Json(usuarios.into_iter().map(Into::into).collect()))
}
