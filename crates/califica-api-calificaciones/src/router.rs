//! Rating lifecycle router configuration.

use crate::handlers::{
    crear_calificacion_handler, editar_factores_handler, panel_auditor_handler,
    panel_corredor_handler, revisar_calificacion_handler, ver_factores_handler,
    ver_revision_handler,
};
use crate::middleware::{auditor_guard, corredor_guard};
use crate::services::{CalificacionService, RevisionPolicy};
use axum::{
    middleware,
    routing::{get, post, put},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// State for the rating lifecycle routes.
#[derive(Clone)]
pub struct CalificacionesState {
    pub service: Arc<CalificacionService>,
}

impl CalificacionesState {
    #[must_use]
    pub fn new(pool: PgPool, policy: RevisionPolicy) -> Self {
        Self {
            service: Arc::new(CalificacionService::new(pool, policy)),
        }
    }
}

/// Rating lifecycle routes.
///
/// Corredor routes (creation, own panel, factor edits) and Auditor routes
/// (review, auditor panel) carry their own role guard; the app layers the
/// session middleware over the whole thing.
pub fn calificaciones_router(state: &CalificacionesState) -> Router {
    let corredor = Router::new()
        .route("/calificaciones", post(crear_calificacion_handler))
        .route("/panel/corredor", get(panel_corredor_handler))
        .route(
            "/calificaciones/:id/factores",
            get(ver_factores_handler).put(editar_factores_handler),
        )
        .layer(middleware::from_fn(corredor_guard));

    let auditor = Router::new()
        .route("/panel/auditor", get(panel_auditor_handler))
        .route("/calificaciones/:id", get(ver_revision_handler))
        .route(
            "/calificaciones/:id/revision",
            post(revisar_calificacion_handler),
        )
        .layer(middleware::from_fn(auditor_guard));

    corredor
        .merge(auditor)
        .layer(Extension(state.service.clone()))
}
