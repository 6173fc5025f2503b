//! The role access gate.
//!
//! A pure predicate over (identity, allowed roles), independent of any
//! request shape. The HTTP layers wrap it: the session middleware resolves
//! the claims, the per-router guards call [`verificar_acceso`] and map the
//! outcome to 401/403.

use crate::claims::SessionClaims;
use califica_core::Rol;
use thiserror::Error;

/// Outcome of a denied access check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denegado {
    /// No authenticated identity.
    #[error("no autenticado")]
    NoAutenticado,

    /// Authenticated, but the role is not in the allow-list. Carries the
    /// caller's role so the response can name it.
    #[error("Acceso denegado. Rol {0} no autorizado.")]
    RolNoAutorizado(Rol),
}

/// Check an identity against an allow-list of roles.
///
/// # Errors
///
/// [`Denegado::NoAutenticado`] when no claims are present,
/// [`Denegado::RolNoAutorizado`] when the role is outside `permitidos`.
pub fn verificar_acceso(
    claims: Option<&SessionClaims>,
    permitidos: &[Rol],
) -> Result<(), Denegado> {
    let claims = claims.ok_or(Denegado::NoAutenticado)?;
    if permitidos.contains(&claims.rol) {
        Ok(())
    } else {
        Err(Denegado::RolNoAutorizado(claims.rol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use califica_core::UsuarioId;
    use chrono::Duration;

    fn claims(rol: Rol) -> SessionClaims {
        SessionClaims::new(
            UsuarioId::new(),
            "Ana".into(),
            "ana@example.com".into(),
            rol,
            "califica",
            Duration::minutes(5),
        )
    }

    #[test]
    fn sin_identidad_no_autenticado() {
        assert_eq!(
            verificar_acceso(None, &[Rol::Administrador]),
            Err(Denegado::NoAutenticado)
        );
    }

    #[test]
    fn rol_permitido_pasa() {
        let c = claims(Rol::Auditor);
        assert_eq!(verificar_acceso(Some(&c), &[Rol::Auditor]), Ok(()));
        assert_eq!(
            verificar_acceso(Some(&c), &[Rol::Administrador, Rol::Auditor]),
            Ok(())
        );
    }

    #[test]
    fn denegacion_nombra_el_rol_del_llamador() {
        let c = claims(Rol::Corredor);
        let err = verificar_acceso(Some(&c), &[Rol::Auditor]).unwrap_err();
        assert_eq!(err, Denegado::RolNoAutorizado(Rol::Corredor));
        assert_eq!(
            err.to_string(),
            "Acceso denegado. Rol Corredor no autorizado."
        );
    }

    #[test]
    fn lista_vacia_deniega_todo() {
        for rol in Rol::ALL {
            let c = claims(rol);
            assert!(verificar_acceso(Some(&c), &[]).is_err());
        }
    }
}
