//! Session claims carried by the bearer token.

use califica_core::{Rol, UsuarioId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
///
/// The role travels inside the token; decoding a token whose role string
/// falls outside the closed set fails outright, so a handler can never see
/// an authenticated caller without a valid role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user id.
    pub sub: UsuarioId,
    /// Display name, used in log details.
    pub nombre: String,
    /// Email as stored.
    pub email: String,
    /// Role in the closed set.
    pub rol: Rol,
    /// Issuer.
    pub iss: String,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for a fresh session.
    #[must_use]
    pub fn new(
        sub: UsuarioId,
        nombre: String,
        email: String,
        rol: Rol,
        issuer: &str,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub,
            nombre,
            email,
            rol,
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Expiration as a `DateTime`.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_follows_ttl() {
        let claims = SessionClaims::new(
            UsuarioId::new(),
            "Ana".into(),
            "ana@example.com".into(),
            Rol::Auditor,
            "califica",
            Duration::minutes(30),
        );
        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert!(claims.expires_at().is_some());
    }
}
