//! Persistence layer for califica.
//!
//! One model module per table, `FromRow` structs with executor-generic
//! query methods so housekeeping writes (audit log, notifications) can join
//! the caller's transaction. Migrations are embedded at compile time.

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::calificacion::{Calificacion, CalificacionConCreador, NuevaCalificacion};
pub use models::factor::Factor;
pub use models::log::{LogAccion, LogConUsuario, LogEntry};
pub use models::notificacion::Notificacion;
pub use models::rol::RolInfo;
pub use models::usuario::{NuevoUsuario, Usuario};
pub use pool::DbPool;
