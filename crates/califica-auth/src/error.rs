//! Error types for the auth crate.

use thiserror::Error;

/// Authentication primitive failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a valid PHC string.
    #[error("invalid password hash format")]
    InvalidHashFormat,

    /// Token could not be created.
    #[error("token creation failed: {0}")]
    TokenCreation(String),

    /// Token expired.
    #[error("session token expired")]
    TokenExpired,

    /// Token invalid for any other reason (bad signature, malformed,
    /// unknown role claim).
    #[error("invalid session token")]
    InvalidToken,
}
