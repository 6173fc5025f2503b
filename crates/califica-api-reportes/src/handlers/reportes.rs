//! Report handlers (Auditor).
//!
//! GET /reportes - the report selection panel.
//! GET /reportes/calificaciones.csv - ratings export.
//! GET /reportes/logs.csv - activity-log export.

use crate::error::ApiReportesError;
use crate::services::ReporteService;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use califica_auth::SessionClaims;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// One available report.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReporteDisponible {
    pub titulo: &'static str,
    pub path: &'static str,
}

fn csv_attachment(filename: &str, cuerpo: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        cuerpo,
    )
        .into_response()
}

/// The report selection panel.
#[utoipa::path(
    get,
    path = "/reportes",
    responses(
        (status = 200, description = "Reportes disponibles", body = [ReporteDisponible]),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Reportes"
)]
pub async fn panel_reportes_handler() -> Json<Vec<ReporteDisponible>> {
    Json(vec![
        ReporteDisponible {
            titulo: "Reporte CSV de Calificaciones",
            path: "/reportes/calificaciones.csv",
        },
        ReporteDisponible {
            titulo: "Reporte CSV de Logs de Actividad",
            path: "/reportes/logs.csv",
        },
    ])
}

/// Every rating as CSV, newest first.
#[utoipa::path(
    get,
    path = "/reportes/calificaciones.csv",
    responses(
        (status = 200, description = "CSV adjunto", content_type = "text/csv"),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Reportes"
)]
pub async fn reporte_calificaciones_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<ReporteService>>,
) -> Result<Response, ApiReportesError> {
    let cuerpo = service.reporte_calificaciones(&claims).await?;
    Ok(csv_attachment("reporte_calificaciones.csv", cuerpo))
}

/// The full activity trail as CSV, newest first.
#[utoipa::path(
    get,
    path = "/reportes/logs.csv",
    responses(
        (status = 200, description = "CSV adjunto", content_type = "text/csv"),
        (status = 403, description = "Rol no autorizado"),
    ),
    security(("bearerAuth" = [])),
    tag = "Reportes"
)]
pub async fn reporte_logs_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<ReporteService>>,
) -> Result<Response, ApiReportesError> {
    let cuerpo = service.reporte_logs(&claims).await?;
    Ok(csv_attachment("reporte_logs_actividad.csv", cuerpo))
}
