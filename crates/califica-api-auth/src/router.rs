//! Authentication router.

use crate::handlers::{
    listar_notificaciones_handler, login_handler, logout_handler, marcar_leida_handler,
};
use crate::middleware::session_middleware;
use crate::services::AuthService;
use axum::{middleware, routing::get, routing::post, Extension, Router};
use califica_auth::TokenCodec;
use sqlx::PgPool;
use std::sync::Arc;

/// State for the authentication routes.
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
    pub codec: TokenCodec,
}

impl AuthState {
    #[must_use]
    pub fn new(pool: PgPool, codec: TokenCodec) -> Self {
        Self {
            service: Arc::new(AuthService::new(pool, codec.clone())),
            codec,
        }
    }
}

/// Router under `/auth`:
///
/// - `POST /auth/login` (public)
/// - `POST /auth/logout`
/// - `GET /auth/notificaciones`
/// - `POST /auth/notificaciones/:id/leida`
pub fn auth_router(state: &AuthState) -> Router {
    let protected = Router::new()
        .route("/auth/logout", post(logout_handler))
        .route("/auth/notificaciones", get(listar_notificaciones_handler))
        .route("/auth/notificaciones/:id/leida", post(marcar_leida_handler))
        .layer(middleware::from_fn_with_state(
            state.codec.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/auth/login", post(login_handler))
        .merge(protected)
        .layer(Extension(state.service.clone()))
}
