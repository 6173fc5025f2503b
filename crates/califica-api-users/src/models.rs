//! Request and response models for the user management API.

use califica_db::{RolInfo, Usuario};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Create-user form. The password is required here; on edit it is optional.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CrearUsuarioRequest {
    #[validate(length(min = 1, max = 100, message = "El nombre es obligatorio"))]
    pub nombre: String,
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria para un nuevo usuario"))]
    pub password: String,
    /// Role name from the closed set.
    #[schema(value_type = String, example = "Corredor")]
    pub rol: String,
}

/// Edit-user form. An absent or empty password keeps the stored hash.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ActualizarUsuarioRequest {
    #[validate(length(min = 1, max = 100, message = "El nombre es obligatorio"))]
    pub nombre: String,
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,
    #[schema(value_type = String, example = "Auditor")]
    pub rol: String,
    pub password: Option<String>,
}

/// Admin panel filters: `?rol=<nombre>&q=<texto>`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListarUsuariosQuery {
    /// Exact role name, or "Todos" for no filter.
    pub rol: Option<String>,
    /// Case-insensitive substring over nombre/email.
    pub q: Option<String>,
}

/// A user as exposed to the admin panel.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsuarioResponse {
    pub id: Uuid,
    pub rol: String,
    pub nombre: String,
    pub email: String,
    pub fecha_reg: NaiveDate,
    pub is_staff: bool,
    pub is_active: bool,
}

/// A role with its display description.
#[derive(Debug, Serialize, ToSchema)]
pub struct RolResponse {
    pub nombre: String,
    pub descripcion: String,
}

impl From<RolInfo> for RolResponse {
    fn from(r: RolInfo) -> Self {
        Self {
            nombre: r.nombre,
            descripcion: r.descripcion,
        }
    }
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            rol: u.rol,
            nombre: u.nombre,
            email: u.email,
            fecha_reg: u.fecha_reg,
            is_staff: u.is_staff,
            is_active: u.is_active,
        }
    }
}
