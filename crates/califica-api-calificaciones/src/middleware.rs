//! Role guards for the rating lifecycle routes.

use crate::error::ApiCalificacionesError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use califica_auth::{verificar_acceso, Denegado, SessionClaims};
use califica_core::Rol;

fn map_denegado(denegado: Denegado) -> ApiCalificacionesError {
    match denegado {
        Denegado::NoAutenticado => ApiCalificacionesError::NoAutenticado,
        Denegado::RolNoAutorizado(rol) => {
            tracing::warn!(rol = %rol, "Acceso denegado");
            ApiCalificacionesError::Prohibido(rol)
        }
    }
}

/// Require the Corredor role (rating creation, factor edits).
pub async fn corredor_guard(
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiCalificacionesError> {
    let claims = request.extensions().get::<SessionClaims>();
    verificar_acceso(claims, &[Rol::Corredor]).map_err(map_denegado)?;
    Ok(next.run(request).await)
}

/// Require the Auditor role (review, auditor panel).
pub async fn auditor_guard(
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiCalificacionesError> {
    let claims = request.extensions().get::<SessionClaims>();
    verificar_acceso(claims, &[Rol::Auditor]).map_err(map_denegado)?;
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

    fn request_with_rol(rol: Rol) -> axum::http::Request<Body> {
        let mut request = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(SessionClaims::new(
            UsuarioId::new(),
            "Beto".into(),
            "beto@example.com".into(),
            rol,
            "califica",
            Duration::minutes(5),
        ));
        request
    }

    #[tokio::test]
    async fn corredor_guard_solo_deja_pasar_corredores() {
        let app = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(corredor_guard));

        let ok = app
            .clone()
            .oneshot(request_with_rol(Rol::Corredor))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let denied = app.oneshot(request_with_rol(Rol::Auditor)).await.unwrap();
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn auditor_guard_solo_deja_pasar_auditores() {
        let app = Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(auditor_guard));

        let ok = app
            .clone()
            .oneshot(request_with_rol(Rol::Auditor))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let denied = app
            .oneshot(request_with_rol(Rol::Administrador))
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    }
}
