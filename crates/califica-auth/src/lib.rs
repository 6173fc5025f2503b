//! Authentication primitives for califica.
//!
//! Password hashing (Argon2id), stateless session tokens (HS256 JWT), and
//! the pure role access gate applied in front of every protected handler.

pub mod access;
pub mod claims;
pub mod error;
pub mod password;
pub mod token;

pub use access::{verificar_acceso, Denegado};
pub use claims::SessionClaims;
pub use error::AuthError;
pub use password::PasswordHasher;
pub use token::TokenCodec;
