//! Notification feed handlers.
//!
//! GET /auth/notificaciones - the caller's notifications.
//! POST /auth/notificaciones/:id/leida - mark one as read.

use crate::error::ApiAuthError;
use crate::models::NotificacionResponse;
use crate::services::AuthService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;
use uuid::Uuid;

/// List the caller's notifications, unread first.
#[utoipa::path(
    get,
    path = "/auth/notificaciones",
    responses(
        (status = 200, description = "Notificaciones del usuario", body = [NotificacionResponse]),
        (status = 401, description = "Sin sesión"),
    ),
    security(("bearerAuth" = [])),
    tag = "Autenticación"
)]
pub async fn listar_notificaciones_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<AuthService>>,
) -> Result<Json<Vec<NotificacionResponse>>, ApiAuthError> {
    let notificaciones = service.notificaciones(&claims).await?;
    Ok(Json(
        notificaciones.into_iter().map(Into::into).collect(),
    ))
}

/// Mark one of the caller's notifications as read.
#[utoipa::path(
    post,
    path = "/auth/notificaciones/{id}/leida",
    params(("id" = Uuid, Path, description = "Id de la notificación")),
    responses(
        (status = 204, description = "Marcada como leída"),
        (status = 404, description = "No es una notificación del usuario"),
    ),
    security(("bearerAuth" = [])),
    tag = "Autenticación"
)]
pub async fn marcar_leida_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<AuthService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiAuthError> {
    service.marcar_notificacion_leida(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
