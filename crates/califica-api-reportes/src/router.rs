//! Report router configuration.

use crate::handlers::{
    panel_reportes_handler, reporte_calificaciones_handler, reporte_logs_handler,
};
use crate::middleware::auditor_guard;
use crate::services::ReporteService;
use axum::{middleware, routing::get, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;

/// State for the report routes.
#[derive(Clone)]
pub struct ReportesState {
    pub service: Arc<ReporteService>,
}

impl ReportesState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: Arc::new(ReporteService::new(pool)),
        }
    }
}

/// Router under `/reportes`, Auditor only.
pub fn reportes_router(state: &ReportesState) -> Router {
    Router::new()
        .route("/reportes", get(panel_reportes_handler))
        .route(
            "/reportes/calificaciones.csv",
            get(reporte_calificaciones_handler),
        )
        .route("/reportes/logs.csv", get(reporte_logs_handler))
        .layer(middleware::from_fn(auditor_guard))
        .layer(Extension(state.service.clone()))
}
