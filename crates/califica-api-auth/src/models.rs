//! Request and response models for the authentication API.

use califica_db::Notificacion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Login form.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,
}

/// Successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer session token.
    pub token: String,
    pub token_type: &'static str,
    /// The caller's role.
    pub rol: String,
    /// Panel path for this role, the API analogue of the original
    /// post-login redirect.
    pub redirect: String,
}

/// One entry of the caller's notification feed.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificacionResponse {
    pub id: Uuid,
    pub tipo: String,
    pub mensaje: String,
    pub fecha_envio: DateTime<Utc>,
    pub leida: bool,
}

impl From<Notificacion> for NotificacionResponse {
    fn from(n: Notificacion) -> Self {
        Self {
            id: n.id,
            tipo: n.tipo,
            mensaje: n.mensaje,
            fecha_envio: n.fecha_envio,
            leida: n.leida,
        }
    }
}
