//! Rating creation handler.
//!
//! POST /calificaciones (Corredor)

use crate::error::ApiCalificacionesError;
use crate::models::{CrearCalificacionRequest, DetalleCalificacionResponse};
use crate::services::CalificacionService;
use axum::{http::StatusCode, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;
use validator::Validate;

/// Create a rating and its 29 factors atomically. The server forces
/// estado=Pendiente and origen=Manual.
#[utoipa::path(
    post,
    path = "/calificaciones",
    request_body = CrearCalificacionRequest,
    responses(
        (status = 201, description = "Calificación creada", body = DetalleCalificacionResponse),
        (status = 422, description = "Formulario o factores inválidos; nada persistido"),
        (status = 500, description = "Fallo de almacenamiento; transacción revertida"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn crear_calificacion_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CalificacionService>>,
    Json(request): Json<CrearCalificacionRequest>,
) -> Result<(StatusCode, Json<DetalleCalificacionResponse>), ApiCalificacionesError> {
    request
        .validate()
        .map_err(|e| ApiCalificacionesError::Validacion(e.to_string()))?;

    let (calificacion, factores) = service.crear(&claims, &request).await?;
    Ok((
        StatusCode::CREATED,
        Json(DetalleCalificacionResponse {
            calificacion: calificacion.into(),
            factores: factores.into_iter().map(Into::into).collect(),
        }),
    ))
}
