pub mod crear;
pub mod factores;
pub mod paneles;
pub mod revisar;

pub use crear::crear_calificacion_handler;
pub use factores::{editar_factores_handler, ver_factores_handler};
pub use paneles::{panel_auditor_handler, panel_corredor_handler};
pub use revisar::{revisar_calificacion_handler, ver_revision_handler};
