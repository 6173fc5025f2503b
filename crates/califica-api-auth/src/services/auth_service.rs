//! Session establishment and teardown.

use crate::error::ApiAuthError;
use crate::models::LoginResponse;
use califica_auth::{PasswordHasher, SessionClaims, TokenCodec};
use califica_core::Rol;
use califica_db::{LogAccion, LogEntry, Notificacion, Usuario};
use sqlx::PgPool;

/// Panel path a role lands on after login. The administrador panel is the
/// user listing.
fn panel_de(rol: Rol) -> &'static str {
    match rol {
        Rol::Administrador => "/usuarios",
        Rol::Auditor => "/panel/auditor",
        Rol::Corredor => "/panel/corredor",
    }
}

/// Authentication service.
pub struct AuthService {
    pool: PgPool,
    hasher: PasswordHasher,
    codec: TokenCodec,
}

impl AuthService {
    #[must_use]
    pub fn new(pool: PgPool, codec: TokenCodec) -> Self {
        Self {
            pool,
            hasher: PasswordHasher::new(),
            codec,
        }
    }

    /// Authenticate and open a session.
    ///
    /// Unknown email and wrong password collapse into the same
    /// [`ApiAuthError::CredencialesInvalidas`]; the login log entry is an
    /// independent append, not tied to any other write.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiAuthError> {
        let usuario = Usuario::find_by_email(&self.pool, email)
            .await?
            .ok_or(ApiAuthError::CredencialesInvalidas)?;

        let valid = self
            .hasher
            .verify(password, &usuario.password_hash)
            .map_err(|e| ApiAuthError::Interno(e.to_string()))?;
        if !valid {
            return Err(ApiAuthError::CredencialesInvalidas);
        }

        let rol = usuario
            .rol_enum()
            .ok_or_else(|| ApiAuthError::Interno(format!("rol fuera de catálogo: {}", usuario.rol)))?;

        let (token, _claims) = self
            .codec
            .issue(usuario.id.into(), &usuario.nombre, &usuario.email, rol)
            .map_err(|e| ApiAuthError::Interno(e.to_string()))?;

        LogEntry::registrar(
            &self.pool,
            Some(usuario.id),
            LogAccion::InicioSesion,
            format!("Usuario {} ({rol}) ha iniciado sesión.", usuario.nombre),
        )
        .await?;

        tracing::info!(usuario = %usuario.email, rol = %rol, "Inicio de sesión");

        Ok(LoginResponse {
            token,
            token_type: "Bearer",
            rol: rol.to_string(),
            redirect: panel_de(rol).to_string(),
        })
    }

    /// Close the caller's session. Stateless tokens mean the only server
    /// side effect is the log entry; the client discards the token.
    pub async fn logout(&self, claims: &SessionClaims) -> Result<(), ApiAuthError> {
        LogEntry::registrar(
            &self.pool,
            Some(claims.sub.as_uuid()),
            LogAccion::CierreSesion,
            format!("El usuario {} ha cerrado sesión.", claims.nombre),
        )
        .await?;

        tracing::info!(usuario = %claims.email, "Cierre de sesión");
        Ok(())
    }

    /// The caller's notification feed.
    pub async fn notificaciones(
        &self,
        claims: &SessionClaims,
    ) -> Result<Vec<Notificacion>, ApiAuthError> {
        Ok(Notificacion::listar_por_usuario(&self.pool, claims.sub.as_uuid()).await?)
    }

    /// Mark one of the caller's notifications as read.
    pub async fn marcar_notificacion_leida(
        &self,
        claims: &SessionClaims,
        id: uuid::Uuid,
    ) -> Result<(), ApiAuthError> {
        let touched = Notificacion::marcar_leida(&self.pool, id, claims.sub.as_uuid()).await?;
        if touched == 0 {
            return Err(ApiAuthError::NoEncontrado);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_rol_tiene_su_panel() {
        assert_eq!(panel_de(Rol::Administrador), "/usuarios");
        assert_eq!(panel_de(Rol::Auditor), "/panel/auditor");
        assert_eq!(panel_de(Rol::Corredor), "/panel/corredor");
    }
}
