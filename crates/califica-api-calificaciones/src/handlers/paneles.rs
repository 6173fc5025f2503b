//! Panel listing handlers.
//!
//! GET /panel/corredor - the corredor's own ratings.
//! GET /panel/auditor - every rating plus recent activity (Auditor).

use crate::error::ApiCalificacionesError;
use crate::models::{CalificacionResponse, PanelAuditorResponse, PanelQuery};
use crate::services::CalificacionService;
use axum::{extract::Query, Extension, Json};
use califica_auth::SessionClaims;
use std::sync::Arc;

/// The corredor panel: own ratings, newest first, optional `?q=` filter
/// over instrumento/estado.
#[utoipa::path(
    get,
    path = "/panel/corredor",
    params(PanelQuery),
    responses(
        (status = 200, description = "Calificaciones propias", body = [CalificacionResponse]),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn panel_corredor_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<CalificacionService>>,
    Query(query): Query<PanelQuery>,
) -> Result<Json<Vec<CalificacionResponse>>, ApiCalificacionesError> {
    let q = query.q.as_deref().filter(|q| !q.is_empty());
    let calificaciones = service.panel_corredor(&claims, q).await?;
    Ok(Json(calificaciones.into_iter().map(Into::into).collect()))
}

/// The auditor panel: every rating with its creator plus the 100 most
/// recent log entries, both filterable with `?q=`.
#[utoipa::path(
    get,
    path = "/panel/auditor",
    params(PanelQuery),
    responses(
        (status = 200, description = "Panel de auditoría", body = PanelAuditorResponse),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Calificaciones"
)]
pub async fn panel_auditor_handler(
    Extension(service): Extension<Arc<CalificacionService>>,
    Query(query): Query<PanelQuery>,
) -> Result<Json<PanelAuditorResponse>, ApiCalificacionesError> {
    let q = query.q.as_deref().filter(|q| !q.is_empty());
    let (calificaciones, logs) = service.panel_auditor(q).await?;
    Ok(Json(PanelAuditorResponse {
        calificaciones: calificaciones.into_iter().map(Into::into).collect(),
        logs: logs.into_iter().map(Into::into).collect(),
    }))
}
