//! Califica — role-gated tax-classification rating service.
//!
//! Axum HTTP server wiring the auth, user management, rating lifecycle and
//! report routers over a shared Postgres pool.

mod bootstrap;
mod config;
mod health;
mod logging;
mod openapi;
mod public;
mod state;

use axum::{middleware, routing::get, Router};
use califica_api_auth::{auth_router, session_middleware, AuthState};
use califica_api_calificaciones::{calificaciones_router, CalificacionesState, RevisionPolicy};
use califica_api_reportes::{reportes_router, ReportesState};
use califica_api_users::{usuarios_router, UsersState};
use califica_auth::TokenCodec;
use califica_db::{run_migrations, DbPool};
use chrono::Duration;
use config::Config;
use state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error de configuración: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    let pool = match DbPool::connect(&config.database_url, config.max_connections).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("No se pudo conectar a la base de datos: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        tracing::error!("Fallo aplicando migraciones: {e}");
        std::process::exit(1);
    }

    let codec = TokenCodec::new(
        config.session_secret.as_bytes(),
        "califica",
        Duration::minutes(config.session_ttl_minutes),
    );

    let users_state = UsersState::new(pool.inner().clone());

    if let Some(admin) = &config.admin {
        match bootstrap::asegurar_superusuario(pool.inner(), &users_state.service, admin).await {
            Ok(creado) => info!(creado, "Bootstrap de superusuario completado"),
            Err(e) => {
                tracing::error!("Fallo el bootstrap del superusuario: {e}");
                std::process::exit(1);
            }
        }
    }

    let auth_state = AuthState::new(pool.inner().clone(), codec.clone());
    let calificaciones_state = CalificacionesState::new(
        pool.inner().clone(),
        RevisionPolicy {
            permitir_re_revision: config.permitir_re_revision,
        },
    );
    let reportes_state = ReportesState::new(pool.inner().clone());
    let app_state = AppState::new(pool.inner().clone());

    let protected = Router::new()
        .merge(usuarios_router(&users_state))
        .merge(calificaciones_router(&calificaciones_state))
        .merge(reportes_router(&reportes_state))
        .layer(middleware::from_fn_with_state(
            codec.clone(),
            session_middleware,
        ));

    let app = Router::new()
        .route("/", get(public::bienvenida_handler))
        .route("/formato-archivo", get(public::formato_archivo_handler))
        .route("/health", get(health::health_handler))
        .with_state(app_state)
        .merge(auth_router(&auth_state))
        .merge(protected)
        .merge(openapi::swagger_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, "No se pudo abrir el puerto: {e}");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, env = ?config.app_env, "Servidor iniciado");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("El servidor terminó con error: {e}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("No se pudo instalar el manejador de Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("No se pudo instalar el manejador de SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Apagado solicitado; cerrando");
}
