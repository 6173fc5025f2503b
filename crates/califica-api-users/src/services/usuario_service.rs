//! User CRUD service.
//!
//! Every mutation writes its activity-log row inside the same transaction,
//! so an admin action and its audit record commit or roll back together.

use crate::error::ApiUsersError;
use crate::models::{ActualizarUsuarioRequest, CrearUsuarioRequest, ListarUsuariosQuery};
use crate::validation::normalizar_email;
use califica_auth::{PasswordHasher, SessionClaims};
use califica_core::Rol;
use califica_db::{LogAccion, LogEntry, NuevoUsuario, RolInfo, Usuario};
use sqlx::PgPool;
use uuid::Uuid;

/// Postgres error codes the service maps to domain errors.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn codigo_de(e: &sqlx::Error) -> Option<String> {
    e.as_database_error()
        .and_then(|d| d.code())
        .map(|c| c.to_string())
}

fn parse_rol(valor: &str) -> Result<Rol, ApiUsersError> {
    valor
        .parse()
        .map_err(|_| ApiUsersError::Validacion(format!("Rol desconocido: {valor}")))
}

/// User management service.
pub struct UsuarioService {
    pool: PgPool,
    hasher: PasswordHasher,
}

impl UsuarioService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            hasher: PasswordHasher::new(),
        }
    }

    /// The user factory: normalize the email, hash the password, persist.
    /// Shared by the admin create flow and the startup superuser bootstrap.
    pub async fn crear_usuario(
        &self,
        rol: Rol,
        nombre: &str,
        email: &str,
        password: &str,
        is_staff: bool,
        actor: Option<&SessionClaims>,
    ) -> Result<Usuario, ApiUsersError> {
        if email.trim().is_empty() {
            return Err(ApiUsersError::Validacion(
                "El email debe ser establecido".to_string(),
            ));
        }

        let email = normalizar_email(email.trim());
        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|e| ApiUsersError::Interno(e.to_string()))?;

        let mut tx = self.pool.begin().await?;

        let usuario = Usuario::crear(
            &mut *tx,
            NuevoUsuario {
                rol,
                nombre: nombre.to_string(),
                email,
                password_hash,
                is_staff,
                is_active: true,
            },
        )
        .await
        .map_err(|e| {
            if codigo_de(&e).as_deref() == Some(UNIQUE_VIOLATION) {
                ApiUsersError::EmailConflicto
            } else {
                ApiUsersError::BaseDeDatos(e)
            }
        })?;

        LogEntry::registrar(
            &mut *tx,
            actor.map(|c| c.sub.as_uuid()),
            LogAccion::CreacionUsuario,
            format!(
                "Admin creó al usuario: {} ({}).",
                usuario.nombre, usuario.email
            ),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(usuario = %usuario.email, rol = %usuario.rol, "Usuario creado");
        Ok(usuario)
    }

    /// Admin create form.
    pub async fn crear(
        &self,
        admin: &SessionClaims,
        request: &CrearUsuarioRequest,
    ) -> Result<Usuario, ApiUsersError> {
        let rol = parse_rol(&request.rol)?;
        self.crear_usuario(
            rol,
            &request.nombre,
            &request.email,
            &request.password,
            false,
            Some(admin),
        )
        .await
    }

    /// Admin edit form. An absent or empty password keeps the stored hash;
    /// anything else is re-hashed and replaces it.
    pub async fn editar(
        &self,
        admin: &SessionClaims,
        id: Uuid,
        request: &ActualizarUsuarioRequest,
    ) -> Result<Usuario, ApiUsersError> {
        let rol = parse_rol(&request.rol)?;
        let email = normalizar_email(request.email.trim());

        let password_hash = match request.password.as_deref() {
            None | Some("") => None,
            Some(plaintext) => Some(
                self.hasher
                    .hash(plaintext)
                    .map_err(|e| ApiUsersError::Interno(e.to_string()))?,
            ),
        };

        let mut tx = self.pool.begin().await?;

        let usuario = Usuario::actualizar(
            &mut *tx,
            id,
            rol,
            &request.nombre,
            &email,
            password_hash.as_deref(),
        )
        .await
        .map_err(|e| {
            if codigo_de(&e).as_deref() == Some(UNIQUE_VIOLATION) {
                ApiUsersError::EmailConflicto
            } else {
                ApiUsersError::BaseDeDatos(e)
            }
        })?
        .ok_or(ApiUsersError::NoEncontrado)?;

        LogEntry::registrar(
            &mut *tx,
            Some(admin.sub.as_uuid()),
            LogAccion::EdicionUsuario,
            format!("Admin editó al usuario: {} ({id}).", usuario.nombre),
        )
        .await?;

        tx.commit().await?;
        Ok(usuario)
    }

    /// Admin delete. Self-deletion is refused with the row untouched; a
    /// user who still owns calificaciones cannot be removed.
    pub async fn eliminar(&self, admin: &SessionClaims, id: Uuid) -> Result<(), ApiUsersError> {
        if admin.sub.as_uuid() == id {
            return Err(ApiUsersError::AutoEliminacion);
        }

        let usuario = Usuario::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiUsersError::NoEncontrado)?;

        let mut tx = self.pool.begin().await?;

        Usuario::eliminar(&mut *tx, id).await.map_err(|e| {
            if codigo_de(&e).as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                ApiUsersError::UsuarioConCalificaciones
            } else {
                ApiUsersError::BaseDeDatos(e)
            }
        })?;

        LogEntry::registrar(
            &mut *tx,
            Some(admin.sub.as_uuid()),
            LogAccion::EliminacionUsuario,
            format!("Admin eliminó al usuario: {} ({id}).", usuario.nombre),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(usuario = %usuario.email, "Usuario eliminado");
        Ok(())
    }

    /// The role display store, for the panel's role filter.
    pub async fn roles_disponibles(&self) -> Result<Vec<RolInfo>, ApiUsersError> {
        Ok(RolInfo::listar(&self.pool).await?)
    }

    /// Admin panel listing with the `?rol=&q=` filters.
    pub async fn listar(&self, query: &ListarUsuariosQuery) -> Result<Vec<Usuario>, ApiUsersError> {
        let rol = match query.rol.as_deref() {
            None | Some("") | Some("Todos") => None,
            Some(valor) => Some(parse_rol(valor)?),
        };
        let q = query.q.as_deref().filter(|q| !q.is_empty());

        Ok(Usuario::listar(&self.pool, rol, q).await?)
    }
}
