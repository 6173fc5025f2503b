//! User management router configuration.

use crate::handlers::{
    crear_usuario_handler, editar_usuario_handler, eliminar_usuario_handler,
    listar_roles_handler, listar_usuarios_handler,
};
use crate::middleware::admin_guard;
use crate::services::UsuarioService;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// State for the user management routes.
#[derive(Clone)]
pub struct UsersState {
    pub service: Arc<UsuarioService>,
}

impl UsersState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: Arc::new(UsuarioService::new(pool)),
        }
    }
}

/// Router under `/usuarios`, Administrador only. The session middleware is
/// layered by the app; the admin guard here.
pub fn usuarios_router(state: &UsersState) -> Router {
    Router::new()
        .route("/usuarios", get(listar_usuarios_handler))
        .route("/usuarios", post(crear_usuario_handler))
        .route("/usuarios/:id", put(editar_usuario_handler))
        .route("/usuarios/:id", delete(eliminar_usuario_handler))
        .route("/roles", get(listar_roles_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(Extension(state.service.clone()))
}
