//! Review handlers (Auditor).
//!
//! GET  /calificaciones/:id - read-only view of any rating.
//! POST /calificaciones/:id/revision - apply a decision.

use crate::error::ApiCalificacionesError;
use crate::models::{CalificacionResponse, DetalleCalificacionResponse, RevisionRequest};
use crate::services::CalificacionService;
use axum::{extract::Path, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;
use uuid::Uuid;

/// Any rating with its factors, read-only, for review.
#[utoipa::path(
    get,
    path = "/calificaciones/{id}",
    params(("id" = Uuid, Path, description = "Id de la calificación")),
    responses(
        (status = 200, description = "Calificación con factores", body = DetalleCalificacionResponse),
        (status = 404, description = "No existe"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn ver_revision_handler(
    Extension(service): Extension<Arc<CalificacionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DetalleCalificacionResponse>, ApiCalificacionesError> {
    let (calificacion, factores) = service.detalle_para_revision(id).await?;
    Ok(Json(DetalleCalificacionResponse {
        calificacion: calificacion.into(),
        factores: factores.into_iter().map(Into::into).collect(),
    }))
}

/// Decide a rating: `nuevo_estado` ∈ {Aprobada, Rechazada}. Any other
/// token is rejected with no state change.
#[utoipa::path(
    post,
    path = "/calificaciones/{id}/revision",
    params(("id" = Uuid, Path, description = "Id de la calificación")),
    request_body = RevisionRequest,
    responses(
        (status = 200, description = "Decisión aplicada", body = CalificacionResponse),
        (status = 404, description = "No existe"),
        (status = 422, description = "Decisión inválida o calificación ya revisada"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn revisar_calificacion_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CalificacionService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<RevisionRequest>,
) -> Result<Json<CalificacionResponse>, ApiCalificacionesError> {
    let calificacion = service.decidir(&claims, id, &request.nuevo_estado).await?;
    Ok(Json(calificacion.into()))
}
