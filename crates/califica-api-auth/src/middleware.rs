//! Session middleware.
//!
//! Decodes the bearer token from the `Authorization` header and inserts
//! [`SessionClaims`] into the request extensions. Handlers and role guards
//! downstream read the claims from there; requests without a valid session
//! never reach them.

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use califica_auth::{SessionClaims, TokenCodec};

use crate::error::ProblemDetails;

fn unauthorized(detail: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ProblemDetails::new(
            StatusCode::UNAUTHORIZED,
            "No autorizado",
            detail,
        )),
    )
        .into_response()
}

/// Require a valid session token and expose its claims to the handler.
pub async fn session_middleware(
    State(codec): State<TokenCodec>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| unauthorized("Falta el encabezado Authorization"))?;

    let token = header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| unauthorized("Encabezado Authorization inválido"))?;

    let claims: SessionClaims = codec.decode(token).map_err(|e| {
        tracing::debug!(error = %e, "Token de sesión rechazado");
        unauthorized("Sesión inválida o expirada")
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use califica_core::{Rol, UsuarioId};
    use chrono::Duration;
    use tower::util::ServiceExt;

    async fn who(Extension(claims): Extension<SessionClaims>) -> String {
        claims.nombre
    }

    fn app(codec: TokenCodec) -> Router {
        Router::new()
            .route("/quien", get(who))
            .layer(middleware::from_fn_with_state(codec, session_middleware))
    }

    fn codec() -> TokenCodec {
        TokenCodec::new(b"secreto-de-prueba", "califica", Duration::minutes(5))
    }

    #[tokio::test]
    async fn sin_encabezado_es_401() {
        let response = app(codec())
            .oneshot(
                axum::http::Request::builder()
                    .uri("/quien")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_valido_expone_los_claims() {
        let codec = codec();
        let (token, _) = codec
            .issue(UsuarioId::new(), "Ana", "ana@example.com", Rol::Auditor)
            .unwrap();
        let response = app(codec)
            .oneshot(
                axum::http::Request::builder()
                    .uri("/quien")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn token_adulterado_es_401() {
        let codec = codec();
        let (token, _) = codec
            .issue(UsuarioId::new(), "Ana", "ana@example.com", Rol::Auditor)
            .unwrap();
        let response = app(codec)
            .oneshot(
                axum::http::Request::builder()
                    .uri("/quien")
                    .header("Authorization", format!("Bearer {token}x"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
