//! Rating lifecycle API.
//!
//! Corredores create ratings (29 factors in one transaction) and edit the
//! factors of their own pending ratings; auditores review any rating and
//! drive the Pendiente → Aprobada/Rechazada transition.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiCalificacionesError;
pub use router::{calificaciones_router, CalificacionesState};
pub use services::{CalificacionService, RevisionPolicy};
