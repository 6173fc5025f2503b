pub mod reportes;

pub use reportes::{
    panel_reportes_handler, reporte_calificaciones_handler, reporte_logs_handler,
};
