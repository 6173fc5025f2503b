//! User management API (Administrador only).
//!
//! List/filter, create, edit and delete system users, each mutation
//! logged atomically with its write.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiUsersError;
pub use router::{usuarios_router, UsersState};
pub use services::UsuarioService;
