pub mod reporte_service;

pub use reporte_service::ReporteService;
