//! Password hashing with Argon2id.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Argon2id password hasher with OWASP-recommended parameters
/// (m=19456 KiB, t=2, p=1).
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Hasher with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. Constant inputs; Params::new only
        // fails on out-of-range values.
        let params = Params::new(19456, 2, 1, None)
            .expect("default Argon2 parameters are in range");
        Self { params }
    }

    /// Hash a plaintext password into a PHC-formatted string.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HashingFailed`] if the underlying hash fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored PHC hash.
    ///
    /// `Ok(false)` means the password does not match; an error means the
    /// stored hash itself is unusable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidHashFormat`] when the stored hash cannot
    /// be parsed.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        match argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AuthError::InvalidHashFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter2!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("hunter2!", &hash).unwrap());
        assert!(!hasher.verify("hunter3!", &hash).unwrap());
    }

    #[test]
    fn same_password_different_salts() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash("clave").unwrap();
        let b = hasher.hash("clave").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_is_invalid_format() {
        let hasher = PasswordHasher::new();
        assert!(matches!(
            hasher.verify("x", "not-a-phc-string"),
            Err(AuthError::InvalidHashFormat)
        ));
    }
}
