//! Startup bootstrap: the superuser account.
//!
//! Mirrors the user factory's superuser contract: the Administrador role
//! row must already exist (seeded by migration) or startup aborts with a
//! configuration error; an already existing email makes the bootstrap a
//! no-op so restarts are idempotent.

use crate::config::AdminBootstrap;
use califica_api_users::validation::normalizar_email;
use califica_api_users::UsuarioService;
use califica_core::Rol;
use califica_db::{RolInfo, Usuario};
use sqlx::PgPool;
use thiserror::Error;

/// Bootstrap failures. All fatal at startup.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(
        "el Rol 'Administrador' no existe; asegúrese de haber corrido las migraciones de datos"
    )]
    RolAdministradorFaltante,

    #[error("database error during bootstrap: {0}")]
    BaseDeDatos(#[from] sqlx::Error),

    #[error("failed to create the superuser: {0}")]
    CreacionFallida(String),
}

/// Ensure the configured superuser exists. Returns `true` when a user was
/// created, `false` when the email was already registered.
pub async fn asegurar_superusuario(
    pool: &PgPool,
    usuarios: &UsuarioService,
    admin: &AdminBootstrap,
) -> Result<bool, BootstrapError> {
    RolInfo::find_by_nombre(pool, Rol::Administrador.as_str())
        .await?
        .ok_or(BootstrapError::RolAdministradorFaltante)?;

    let email = normalizar_email(&admin.email);
    if Usuario::find_by_email(pool, &email).await?.is_some() {
        tracing::info!(email = %email, "Superusuario ya existe");
        return Ok(false);
    }

    usuarios
        .crear_usuario(
            Rol::Administrador,
            &admin.nombre,
            &email,
            &admin.password,
            true,
            None,
        )
        .await
        .map_err(|e| BootstrapError::CreacionFallida(e.to_string()))?;

    tracing::info!(email = %email, "Superusuario creado");
    Ok(true)
}
