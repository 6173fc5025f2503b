//! Factor edit handlers (Corredor, ownership-scoped).
//!
//! GET  /calificaciones/:id/factores - the edit view.
//! PUT  /calificaciones/:id/factores - apply new values.

use crate::error::ApiCalificacionesError;
use crate::models::{DetalleCalificacionResponse, EditarFactoresRequest, FactorResponse};
use crate::services::CalificacionService;
use axum::{extract::Path, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;
use uuid::Uuid;

/// An own rating with its factors. A rating created by someone else reads
/// as not found.
#[utoipa::path(
    get,
    path = "/calificaciones/{id}/factores",
    params(("id" = Uuid, Path, description = "Id de la calificación")),
    responses(
        (status = 200, description = "Calificación propia con factores", body = DetalleCalificacionResponse),
        (status = 404, description = "No existe o no es propia"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn ver_factores_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CalificacionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DetalleCalificacionResponse>, ApiCalificacionesError> {
    let (calificacion, factores) = service.detalle_propio(&claims, id).await?;
    Ok(Json(DetalleCalificacionResponse {
        calificacion: calificacion.into(),
        factores: factores.into_iter().map(Into::into).collect(),
    }))
}

/// Update the factor values of an own pending rating. Only values change;
/// names identify the rows and come from the stored catalog.
#[utoipa::path(
    put,
    path = "/calificaciones/{id}/factores",
    params(("id" = Uuid, Path, description = "Id de la calificación")),
    request_body = EditarFactoresRequest,
    responses(
        (status = 200, description = "Factores actualizados", body = [FactorResponse]),
        (status = 404, description = "No existe o no es propia"),
        (status = 422, description = "Set de factores inválido o calificación ya revisada"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn editar_factores_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CalificacionService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditarFactoresRequest>,
) -> Result<Json<Vec<FactorResponse>>, ApiCalificacionesError> {
    let factores = service.editar_factores(&claims, id, &request).await?;
    Ok(Json(factores.into_iter().map(Into::into).collect()))
}
