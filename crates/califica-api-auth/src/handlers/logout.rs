//! Logout endpoint handler.
//!
//! POST /auth/logout - Close the caller's session.

use crate::error::ApiAuthError;
use crate::services::AuthService;
use axum::{http::StatusCode, Extension};
use califica_auth::SessionClaims;
use std::sync::Arc;

/// Close the session. Appends the logout log entry; the client discards
/// the token.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 204, description = "Sesión cerrada"),
        (status = 401, description = "Sin sesión"),
    ),
    security(("bearerAuth" = [])),
    tag = "Autenticación"
)]
pub async fn logout_handler(
    Extension(claims): Extension<SessionClaims>,
    Extension(service): Extension<Arc<AuthService>>,
) -> Result<StatusCode, ApiAuthError> {
    service.logout(&claims).await?;
    Ok(StatusCode::NO_CONTENT)
}
