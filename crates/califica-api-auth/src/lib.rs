//! Authentication API: login, logout, session middleware and the caller's
//! notification feed.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiAuthError;
pub use middleware::session_middleware;
pub use router::{auth_router, AuthState};
pub use services::AuthService;
