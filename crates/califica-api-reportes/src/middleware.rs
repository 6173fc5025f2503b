//! Auditor role guard for the report routes.

use crate::error::ApiReportesError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use califica_auth::{verificar_acceso, Denegado, SessionClaims};
use califica_core::Rol;

/// Require the Auditor role.
pub async fn auditor_guard(
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiReportesError> {
    let claims = request.extensions().get::<SessionClaims>();

    verificar_acceso(claims, &[Rol::Auditor]).map_err(|denegado| match denegado {
        Denegado::NoAutenticado => ApiReportesError::NoAutenticado,
        Denegado::RolNoAutorizado(rol) => {
            tracing::warn!(rol = %rol, "Acceso a reportes denegado");
            ApiReportesError::Prohibido(rol)
        }
    })?;

    Ok(next.run(request).await)
}
