//! Role listing handler.
//!
//! GET /roles - the role display store, for the admin panel's role filter.

use crate::error::ApiUsersError;
use crate::models::RolResponse;
use crate::services::UsuarioService;
use axum::{Extension, Json};
use std::sync::Arc;

/// List the assignable roles with their descriptions.
#[utoipa::path(
    get,
    path = "/roles",
    responses(
        (status = 200, description = "Roles del sistema", body = [RolResponse]),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Usuarios"
)]
pub async fn listar_roles_handler(
    Extension(service): Extension<Arc<UsuarioService>>,
) -> Result<Json<Vec<RolResponse>>, ApiUsersError> {
    let roles = service.roles_disponibles().await?;
    Ok(Json(roles.into_iter().map(Into::into).collect()))
}
