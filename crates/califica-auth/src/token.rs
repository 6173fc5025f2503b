//! Session token encoding and decoding (HS256).

use crate::claims::SessionClaims;
use crate::error::AuthError;
use califica_core::{Rol, UsuarioId};
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Encodes and decodes session tokens with a shared secret.
///
/// A single self-contained service has no second party to distribute a
/// public key to, so symmetric HS256 with a configured secret is used.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl TokenCodec {
    /// Codec from the configured secret, issuer and session TTL.
    #[must_use]
    pub fn new(secret: &[u8], issuer: impl Into<String>, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            ttl,
        }
    }

    /// Issue a token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenCreation`] if serialization fails.
    pub fn issue(
        &self,
        sub: UsuarioId,
        nombre: &str,
        email: &str,
        rol: Rol,
    ) -> Result<(String, SessionClaims), AuthError> {
        let claims = SessionClaims::new(
            sub,
            nombre.to_string(),
            email.to_string(),
            rol,
            &self.issuer,
            self.ttl,
        );
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))?;
        Ok((token, claims))
    }

    /// Decode and validate a token.
    ///
    /// # Errors
    ///
    /// [`AuthError::TokenExpired`] for expired tokens, otherwise
    /// [`AuthError::InvalidToken`] (bad signature, malformed payload,
    /// wrong issuer, role outside the closed set).
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        decode::<SessionClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret", "califica", Duration::minutes(5))
    }

    #[test]
    fn issue_and_decode_round_trip() {
        let codec = codec();
        let id = UsuarioId::new();
        let (token, issued) = codec
            .issue(id, "Ana", "ana@example.com", Rol::Corredor)
            .unwrap();
        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded, issued);
        assert_eq!(decoded.sub, id);
        assert_eq!(decoded.rol, Rol::Corredor);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let codec = codec();
        let (token, _) = codec
            .issue(UsuarioId::new(), "Ana", "a@b.c", Rol::Auditor)
            .unwrap();
        let other = TokenCodec::new(b"other-secret", "califica", Duration::minutes(5));
        assert!(matches!(other.decode(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let codec = codec();
        let (token, _) = codec
            .issue(UsuarioId::new(), "Ana", "a@b.c", Rol::Auditor)
            .unwrap();
        let other = TokenCodec::new(b"test-secret", "otro", Duration::minutes(5));
        assert!(matches!(other.decode(&token), Err(AuthError::InvalidToken)));
    }
}
