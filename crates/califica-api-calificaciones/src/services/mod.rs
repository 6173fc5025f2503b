pub mod calificacion_service;

pub use calificacion_service::{CalificacionService, RevisionPolicy};
