//! Public informational endpoints.
//!
//! GET /               - welcome/landing payload.
//! GET /formato-archivo - the factor file-format help page.

use axum::Json;
use califica_core::NOMBRES_FACTORES;
use serde::Serialize;
use utoipa::ToSchema;

/// Landing payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct BienvenidaResponse {
    pub servicio: &'static str,
    pub mensaje: &'static str,
    pub login: &'static str,
}

/// Welcome page.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Página de bienvenida", body = BienvenidaResponse)),
    tag = "Público"
)]
pub async fn bienvenida_handler() -> Json<BienvenidaResponse> {
    Json(BienvenidaResponse {
        servicio: "califica",
        mensaje: "Sistema de calificaciones tributarias",
        login: "/auth/login",
    })
}

/// File-format help payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormatoArchivoResponse {
    pub descripcion: &'static str,
    pub factores: Vec<&'static str>,
}

/// Describe the expected factor layout: the fixed 29-name catalog every
/// calificacion carries.
#[utoipa::path(
    get,
    path = "/formato-archivo",
    responses((status = 200, description = "Formato esperado", body = FormatoArchivoResponse)),
    tag = "Público"
)]
pub async fn formato_archivo_handler() -> Json<FormatoArchivoResponse> {
    Json(FormatoArchivoResponse {
        descripcion:
            "Cada calificación lleva exactamente 29 factores, nombrados según el catálogo fijo, \
             con valores numéricos de hasta 4 decimales.",
        factores: NOMBRES_FACTORES.to_vec(),
    })
}
