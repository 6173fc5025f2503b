//! Administrador role guard.

use crate::error::ApiUsersError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use califica_auth::{verificar_acceso, Denegado, SessionClaims};
use califica_core::Rol;

/// Require the Administrador role.
///
/// The session middleware must run first; it inserts [`SessionClaims`] into
/// the request extensions.
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, ApiUsersError> {
    let claims = request.extensions().get::<SessionClaims>();

    verificar_acceso(claims, &[Rol::Administrador]).map_err(|denegado| match denegado {
        Denegado::NoAutenticado => ApiUsersError::NoAutenticado,
        Denegado::RolNoAutorizado(rol) => {
            tracing::warn!(rol = %rol, "Acceso al panel de administración denegado");
            ApiUsersError::Prohibido(rol)
        }
    })?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{middleware, routing::get, Router};
    use califica_core::UsuarioId;
    use chrono::Duration;
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(admin_guard))
    }

    fn request_with_claims(rol: Option<Rol>) -> axum::http::Request<Body> {
        let mut request = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(rol) = rol {
            request.extensions_mut().insert(SessionClaims::new(
                UsuarioId::new(),
                "Ana".into(),
                "ana@example.com".into(),
                rol,
                "califica",
                Duration::minutes(5),
            ));
        }
        request
    }

    #[tokio::test]
    async fn administrador_pasa() {
        let response = app()
            .oneshot(request_with_claims(Some(Rol::Administrador)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn otros_roles_son_403() {
        for rol in [Rol::Auditor, Rol::Corredor] {
            let response = app().oneshot(request_with_claims(Some(rol))).await.unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    #[tokio::test]
    async fn sin_claims_es_401() {
        let response = app().oneshot(request_with_claims(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
