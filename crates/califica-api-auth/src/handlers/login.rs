//! Login endpoint handler.
//!
//! POST /auth/login - Authenticate and open a session.

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::AuthService;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// Authenticate with email and password.
///
/// Both failure modes (unknown email, wrong password) answer with the same
/// message and status.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Sesión iniciada", body = LoginResponse),
        (status = 401, description = "Credenciales inválidas"),
        (status = 422, description = "Solicitud malformada"),
    ),
    tag = "Autenticación"
)]
pub async fn login_handler(
    Extension(service): Extension<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiAuthError> {
    request
        .validate()
        .map_err(|e| ApiAuthError::Validacion(e.to_string()))?;

    let response = service.login(&request.email, &request.password).await?;
    Ok(Json(response))
}
